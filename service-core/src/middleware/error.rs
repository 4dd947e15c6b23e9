//! Centralized error responder.
//!
//! Every failure forwarded through a [`ForwardedError`] extension, whether
//! returned by an extractor, a handler, or caught as a panic, is rendered here
//! into the uniform `{error, message}` body.

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::Config;
use crate::error::ForwardedError;

pub const ERROR_LABEL: &str = "Internal server error";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Controls whether raw error messages reach the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorVerbosity {
    pub expose_messages: bool,
}

impl ErrorVerbosity {
    pub fn for_config(config: &Config) -> Self {
        Self {
            expose_messages: config.is_development(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub async fn error_responder(
    State(verbosity): State<ErrorVerbosity>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let Some(forwarded) = response.extensions().get::<ForwardedError>().cloned() else {
        return response;
    };

    tracing::error!(
        method = %method,
        path = %path,
        status = forwarded.status.as_u16(),
        error = %forwarded.message,
        "Request failed"
    );

    let message = if verbosity.expose_messages {
        forwarded.message
    } else {
        GENERIC_ERROR_MESSAGE.to_string()
    };

    (
        forwarded.status,
        Json(ErrorBody {
            error: ERROR_LABEL.to_string(),
            message,
        }),
    )
        .into_response()
}

/// Panic handler for `CatchPanicLayer::custom`; the panic becomes a forwarded 500.
pub fn forward_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    ForwardedError::new(StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}
