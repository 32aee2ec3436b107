use crate::error::QpError;
use crate::profile::ProfileForm;

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

/// Profile fields posted to `/create`, either url-encoded or as JSON.
///
/// A body that cannot be read as either counts as an empty submission, so
/// it ends up failing the required-fields check like any other.
pub struct ProfileSubmission(pub ProfileForm);

enum BodyKind {
    UrlEncoded,
    Json,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let essence = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase());

    match essence.as_deref() {
        Some("application/x-www-form-urlencoded") => BodyKind::UrlEncoded,
        Some(essence) if essence == "application/json" || essence.ends_with("+json") => {
            BodyKind::Json
        }
        _ => BodyKind::Other,
    }
}

#[async_trait::async_trait]
impl<S> FromRequest<S> for ProfileSubmission
where
    S: Send + Sync,
{
    type Rejection = QpError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let form = match body_kind(&request) {
            BodyKind::UrlEncoded => Form::<ProfileForm>::from_request(request, state)
                .await
                .map(|Form(form)| form)
                .map_err(|rejection| rejection.body_text()),
            BodyKind::Json => Json::<ProfileForm>::from_request(request, state)
                .await
                .map(|Json(form)| form)
                .map_err(|rejection| rejection.body_text()),
            BodyKind::Other => Ok(ProfileForm::default()),
        };

        Ok(Self(form.unwrap_or_else(|reason| {
            tracing::debug!(%reason, "unreadable profile submission");
            ProfileForm::default()
        })))
    }
}
