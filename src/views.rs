use crate::error::QpResult;
use crate::profile::{CreatedProfile, Profile};

use anyhow::Context;
use askama::Template;
use axum::response::Html;

/// The submission form, optionally followed by the code for a profile that
/// was just created.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView<'a> {
    pub qr_data_url: Option<&'a str>,
    pub profile_url: Option<&'a str>,
    pub preview: Option<&'a Profile>,
}

impl<'a> IndexView<'a> {
    pub fn empty() -> Self {
        Self {
            qr_data_url: None,
            profile_url: None,
            preview: None,
        }
    }

    pub fn created(created: &'a CreatedProfile) -> Self {
        Self {
            qr_data_url: Some(&created.qr_data_url),
            profile_url: Some(&created.profile_url),
            preview: Some(&created.profile),
        }
    }
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileView<'a> {
    pub profile: &'a Profile,
}

pub fn render(view: &impl Template) -> QpResult<Html<String>> {
    Ok(Html(view.render().context("failed to render template")?))
}
