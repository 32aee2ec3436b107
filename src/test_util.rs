use axum::body::Body;
use axum::http::header::*;
use axum::http::{HeaderMap, Request, StatusCode};
use serde::Serialize;
use tower::ServiceExt;

pub trait WithFormBody {
    fn with_form_body<B: Serialize + ?Sized>(self, body: &B) -> Request<Body>;
}

impl WithFormBody for axum::http::request::Builder {
    fn with_form_body<B: Serialize + ?Sized>(self, body: &B) -> Request<Body> {
        self.header(
            CONTENT_TYPE,
            mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
        )
        .body(Body::from(serde_urlencoded::to_string(body).unwrap()))
        .unwrap()
    }
}

pub trait EmptyBody {
    fn empty_body(self) -> Request<Body>;
}

impl EmptyBody for axum::http::request::Builder {
    fn empty_body(self) -> Request<Body> {
        self.body(Body::empty()).unwrap()
    }
}

pub async fn request(
    router: axum::Router,
    request: Request<Body>,
) -> (StatusCode, HeaderMap, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    match axum::body::to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => (status, headers, String::from_utf8(bytes.to_vec()).unwrap()),
        Err(_) => panic!("error while fetching body"),
    }
}

pub fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with(mime::TEXT_HTML.as_ref()))
}

/// The id a rendered page carries in its `data-profile-id` attribute.
pub fn rendered_profile_id(html: &str) -> Option<String> {
    const MARKER: &str = r#"data-profile-id=""#;

    let start = html.find(MARKER)? + MARKER.len();
    let end = html[start..].find('"')?;
    Some(html[start..start + end].to_string())
}
