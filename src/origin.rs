use crate::error::QpError;
use crate::ProfileId;

use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::HeaderMap;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Scheme and host the client used to reach us, as needed for building
/// absolute links back into the app.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    pub fn profile_url(&self, id: &ProfileId) -> String {
        format!("{}://{}/p/{}", self.scheme, self.host, id)
    }

    fn from_parts(parts: &Parts) -> Result<Self, QpError> {
        // A proxy chain may append to the header; the first entry is the client's.
        let scheme = header_str(&parts.headers, X_FORWARDED_PROTO)
            .and_then(|proto| proto.split(',').next())
            .map(str::trim)
            .filter(|proto| !proto.is_empty())
            .or_else(|| parts.uri.scheme_str())
            .unwrap_or("http");

        let host = header_str(&parts.headers, HOST.as_str())
            .or_else(|| parts.uri.authority().map(|authority| authority.as_str()))
            .ok_or(QpError::MissingHost)?;

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
        })
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[async_trait::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = QpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts)
    }
}
