//! vCard 3.0 rendering of a profile.

use super::Profile;

const CRLF: &str = "\r\n";

pub const CONTENT_TYPE: &str = "text/vcard; charset=utf-8";

/// Render the contact card. Optional fields that are empty are left out
/// entirely, and every content line ends with CRLF.
pub fn render(profile: &Profile) -> String {
    let mut card = VCard::default();

    card.line("BEGIN", "VCARD");
    card.line("VERSION", "3.0");
    card.text("FN", &profile.fullname);
    if !profile.phone.is_empty() {
        card.text("TEL;TYPE=CELL", &profile.phone);
    }
    card.text("EMAIL", &profile.email);
    for url in [&profile.linkedin, &profile.instagram] {
        if !url.is_empty() {
            card.uri("URL", url);
        }
    }
    card.line("END", "VCARD");

    card.0
}

#[derive(Default)]
struct VCard(String);

impl VCard {
    fn line(&mut self, name: &str, value: &str) {
        self.0.push_str(name);
        self.0.push(':');
        self.0.push_str(value);
        self.0.push_str(CRLF);
    }

    fn text(&mut self, name: &str, value: &str) {
        self.line(name, &escape_text(value));
    }

    fn uri(&mut self, name: &str, value: &str) {
        let value: String = value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        self.line(name, &value);
    }
}

// RFC 2426 section 4: backslash, comma, semicolon and newlines in text values.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }

    escaped
}
