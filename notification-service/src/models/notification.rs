use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::utils::now_iso8601;
use thiserror::Error;

pub const MESSAGE_PREFIX: &str = "new content received: ";

/// A validated notification request.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPayload {
    pub content: String,
}

impl NotificationPayload {
    /// Accepts any JSON object whose `content` is a string, including `""`.
    ///
    /// Missing content, or content of any other JSON type, is rejected. Other
    /// keys are ignored.
    pub fn from_body(body: &Value) -> Result<Self, InvalidPayload> {
        match body.as_object().and_then(|fields| fields.get("content")) {
            Some(Value::String(content)) => Ok(Self {
                content: content.clone(),
            }),
            _ => Err(InvalidPayload),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationResponse {
    pub message: String,
    pub timestamp: String,
}

impl NotificationResponse {
    pub fn acknowledge(payload: &NotificationPayload) -> Self {
        Self {
            message: format!("{}{}", MESSAGE_PREFIX, payload.content),
            timestamp: now_iso8601(),
        }
    }
}

/// Client input error. Answered directly with 400, never forwarded.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Content is required and must be a string")]
pub struct InvalidPayload;

#[derive(Debug, Serialize)]
struct BadRequestBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for InvalidPayload {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(BadRequestBody {
                error: "Bad Request",
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_string_content() {
        let payload = NotificationPayload::from_body(&json!({"content": "hello"})).unwrap();
        assert_eq!(payload.content, "hello");
    }

    #[test]
    fn accepts_empty_string_content() {
        let payload = NotificationPayload::from_body(&json!({"content": ""})).unwrap();
        assert_eq!(payload.content, "");
    }

    #[test]
    fn ignores_extra_fields() {
        let payload =
            NotificationPayload::from_body(&json!({"content": "x", "priority": 3})).unwrap();
        assert_eq!(payload.content, "x");
    }

    #[test]
    fn rejects_missing_or_non_string_content() {
        let bodies = [
            json!({}),
            json!({"message": "hello"}),
            json!({"content": 42}),
            json!({"content": true}),
            json!({"content": null}),
            json!({"content": ["a"]}),
            json!({"content": {"text": "a"}}),
            json!([{"content": "a"}]),
            json!(null),
        ];

        for body in bodies {
            assert_eq!(
                NotificationPayload::from_body(&body),
                Err(InvalidPayload),
                "body {body} should be rejected"
            );
        }
    }

    #[test]
    fn message_is_literal_concatenation() {
        let payload = NotificationPayload {
            content: "<b>hi</b> & \"bye\"".to_string(),
        };
        let response = NotificationResponse::acknowledge(&payload);
        assert_eq!(response.message, "new content received: <b>hi</b> & \"bye\"");
    }

    #[test]
    fn invalid_payload_responds_400() {
        let response = InvalidPayload.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
