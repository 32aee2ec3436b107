mod profile_routes;
mod submission;

use crate::app::App;

use axum::routing::Router;
use entrait::Impl;
use std::path::Path;
use tower_http::services::ServeDir;

/// Axum router for the real app. Paths not claimed by a route are looked up
/// in `static_dir`.
pub fn router(static_dir: &Path) -> Router {
    profile_routes::ProfileRoutes::<Impl<App>>::router()
        .fallback_service(ServeDir::new(static_dir))
}
