use axum::Json;
use serde_json::{json, Value};

use super::notification::NOTIFICATION_ENDPOINT;

pub const SERVICE_VERSION: &str = "1.0.0";

/// Service description listing the available endpoints.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Friend Lines App Server",
        "version": SERVICE_VERSION,
        "endpoints": {
            "health": "/health",
            "root": "/",
            "notification": NOTIFICATION_ENDPOINT
        }
    }))
}
