use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::Parser, Clone, Debug)]
#[command(name = "qr-profile", about = "Contact profiles behind a scannable QR code")]
pub struct Config {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory served verbatim for paths not matched by a route.
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Upper bound on the time spent rendering a QR code.
    #[arg(long, env = "CODE_TIMEOUT_MS", default_value_t = 5000)]
    pub code_timeout_ms: u64,
}

impl Config {
    pub fn code_timeout(&self) -> Duration {
        Duration::from_millis(self.code_timeout_ms)
    }
}
