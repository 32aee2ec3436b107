pub mod app;
pub mod config;
pub mod error;
pub mod origin;
pub mod profile;
pub mod qr;
pub mod routes;
pub mod store;
pub mod timestamp;

mod views;

#[cfg(test)]
mod test_util;

use anyhow::Context;
use axum::extract::Extension;
use entrait::*;
use std::net::SocketAddr;
use tower::ServiceBuilder;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ProfileId(pub uuid::Uuid);

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl std::str::FromStr for ProfileId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }
}

/// Clock and id source, replaced by fixed values in tests.
#[entrait(mock_api=SystemMock)]
pub trait System {
    fn get_current_time(&self) -> time::OffsetDateTime;

    fn new_profile_id(&self) -> ProfileId;
}

pub async fn serve(app: app::App) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], app.config.port));

    let router = routes::router(&app.config.static_dir).layer(
        ServiceBuilder::new()
            // Enables logging. Use `RUST_LOG=tower_http=debug`
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(Extension(Impl::new(app))),
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;

    tracing::info!("QR profile app listening at http://localhost:{}", addr.port());

    axum::serve(listener, router)
        .await
        .context("error running HTTP server")
}
