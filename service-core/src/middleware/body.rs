//! Request body decoding stage.
//!
//! Runs ahead of routing for every request. JSON and URL-encoded bodies are
//! decoded into a [`DecodedBody`] request extension; anything else leaves an
//! empty object behind. Decoding failures are forwarded to the error responder.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Maximum accepted request body size in bytes.
pub const BODY_LIMIT: usize = 100 * 1024;

/// The decoded request body.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBody(pub Value);

impl Default for DecodedBody {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DecodedBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<DecodedBody>()
            .cloned()
            .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("request body was not decoded")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    UrlEncoded,
}

impl BodyKind {
    fn detect(headers: &HeaderMap) -> Result<Option<Self>, AppError> {
        let Some(content_type) = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(None);
        };

        let mut params = content_type.split(';');
        let mime = params.next().unwrap_or_default().trim().to_ascii_lowercase();

        let kind = if mime == "application/json" {
            BodyKind::Json
        } else if mime == "application/x-www-form-urlencoded" {
            BodyKind::UrlEncoded
        } else {
            return Ok(None);
        };

        for param in params {
            let Some((name, value)) = param.split_once('=') else {
                continue;
            };
            if name.trim().eq_ignore_ascii_case("charset") {
                let charset = value.trim().trim_matches('"').to_ascii_lowercase();
                if !kind.accepts_charset(&charset) {
                    return Err(AppError::UnsupportedCharset(charset.to_ascii_uppercase()));
                }
            }
        }

        Ok(Some(kind))
    }

    /// JSON takes any `utf-*` charset, URL-encoded bodies only UTF-8.
    fn accepts_charset(self, charset: &str) -> bool {
        match self {
            BodyKind::Json => charset.starts_with("utf-"),
            BodyKind::UrlEncoded => charset == "utf-8",
        }
    }
}

/// Decode the request body according to its content type.
pub async fn decode_body(req: Request, next: Next) -> Response {
    match decode(req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

async fn decode(mut req: Request) -> Result<Request, AppError> {
    let Some(kind) = BodyKind::detect(req.headers())? else {
        req.extensions_mut().insert(DecodedBody::default());
        return Ok(req);
    };

    let (mut parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(read_error)?;

    let value = match kind {
        BodyKind::Json => parse_json(&bytes)?,
        BodyKind::UrlEncoded => parse_urlencoded(&bytes)?,
    };
    parts.extensions.insert(DecodedBody(value));

    Ok(Request::from_parts(parts, Body::from(bytes)))
}

fn read_error(err: axum::Error) -> AppError {
    let inner = err.into_inner();
    if inner.is::<LengthLimitError>() {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(anyhow::anyhow!("request aborted: {}", inner))
    }
}

/// Only objects and arrays are accepted at the top level.
fn parse_json(bytes: &[u8]) -> Result<Value, AppError> {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        None => Ok(Value::Object(Map::new())),
        Some(b'{') | Some(b'[') => {
            serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))
        }
        Some(_) => Err(AppError::BadRequest(anyhow::anyhow!(
            "JSON body must be an object or array"
        ))),
    }
}

/// Repeated keys collect into an array of strings.
fn parse_urlencoded(bytes: &[u8]) -> Result<Value, AppError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes)
        .map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))?;

    let mut map = Map::new();
    for (key, value) in pairs {
        match map.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                map.insert(key, Value::String(value));
            }
        }
    }

    Ok(Value::Object(map))
}
