use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(anyhow::Error),

    #[error("request entity too large")]
    PayloadTooLarge,

    #[error("unsupported charset \"{0}\"")]
    UnsupportedCharset(String),

    #[error("{0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    /// Status code declared by the error itself, if any.
    ///
    /// Errors without one are reported as 500 by the error responder.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            AppError::PayloadTooLarge => Some(StatusCode::PAYLOAD_TOO_LARGE),
            AppError::UnsupportedCharset(_) => Some(StatusCode::UNSUPPORTED_MEDIA_TYPE),
            AppError::InternalError(_) | AppError::ConfigError(_) => None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// An error handed over to the centralized error responder.
///
/// Travels as a response extension until the responder renders the body.
#[derive(Debug, Clone)]
pub struct ForwardedError {
    pub status: StatusCode,
    pub message: String,
}

impl ForwardedError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<&AppError> for ForwardedError {
    fn from(err: &AppError) -> Self {
        ForwardedError::new(
            err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            err.to_string(),
        )
    }
}

impl IntoResponse for ForwardedError {
    fn into_response(self) -> Response {
        let mut res = self.status.into_response();
        res.extensions_mut().insert(self);
        res
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ForwardedError::from(&self).into_response()
    }
}
