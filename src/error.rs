use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::time::Duration;

pub type QpResult<T, E = QpError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum QpError {
    #[error("Full name and email are required.")]
    MissingRequiredFields,

    #[error("Host header is required.")]
    MissingHost,

    #[error("Profile not found.")]
    ProfileNotFound,

    #[error("QR code generation timed out after {0:?}")]
    CodeGenerationTimeout(Duration),

    #[error("an internal server error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl QpError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingRequiredFields => StatusCode::BAD_REQUEST,
            Self::MissingHost => StatusCode::BAD_REQUEST,
            Self::ProfileNotFound => StatusCode::NOT_FOUND,
            Self::CodeGenerationTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QpError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingRequiredFields | Self::MissingHost | Self::ProfileNotFound => {
                (self.status_code(), self.to_string()).into_response()
            }
            Self::CodeGenerationTimeout(timeout) => {
                tracing::error!(?timeout, "QR code generation timed out");
                (self.status_code(), "QR code generation timed out.").into_response()
            }
            Self::Anyhow(ref e) => {
                tracing::error!("Generic error: {:?}", e);
                (self.status_code(), "Server error").into_response()
            }
        }
    }
}
