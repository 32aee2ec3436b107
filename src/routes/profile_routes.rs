use crate::error::{QpError, QpResult};
use crate::origin::RequestOrigin;
use crate::profile::{self, vcard};
use crate::routes::submission::ProfileSubmission;
use crate::views::{self, IndexView, ProfileView};
use crate::ProfileId;

use axum::extract::{Extension, Path};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};

pub struct ProfileRoutes<A>(std::marker::PhantomData<A>);

impl<A> ProfileRoutes<A>
where
    A: profile::CreateProfile
        + profile::FetchProfile
        + profile::ExportVCard
        + Sized
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new()
            .route("/", get(Self::home))
            .route("/create", post(Self::create))
            .route("/p/:id", get(Self::view_profile))
            .route("/p/:id/vcard", get(Self::export_vcard))
    }

    async fn home() -> QpResult<Html<String>> {
        views::render(&IndexView::empty())
    }

    async fn create(
        Extension(app): Extension<A>,
        origin: Option<RequestOrigin>,
        ProfileSubmission(form): ProfileSubmission,
    ) -> QpResult<Html<String>> {
        let created = app.create_profile(origin, form).await?;
        views::render(&IndexView::created(&created))
    }

    async fn view_profile(
        Extension(app): Extension<A>,
        Path(id): Path<String>,
    ) -> QpResult<Html<String>> {
        let profile = app.fetch_profile(parse_id(&id)?).await?;
        views::render(&ProfileView { profile: &profile })
    }

    async fn export_vcard(
        Extension(app): Extension<A>,
        Path(id): Path<String>,
    ) -> QpResult<impl IntoResponse> {
        let card = app.export_vcard(parse_id(&id)?).await?;
        Ok(([(CONTENT_TYPE, vcard::CONTENT_TYPE)], card))
    }
}

// Ids are handed out in hyphenated lowercase form only. Anything else,
// including other spellings of the same UUID, was never handed out.
fn parse_id(id: &str) -> QpResult<ProfileId> {
    let parsed: ProfileId = id.parse().map_err(|_| QpError::ProfileNotFound)?;
    if parsed.to_string() != id {
        return Err(QpError::ProfileNotFound);
    }
    Ok(parsed)
}
