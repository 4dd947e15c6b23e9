use axum::{extract::Request, middleware::Next, response::Response};

use super::tracing::RequestId;
use crate::utils::now_iso8601;

/// Record every inbound request to the operational log.
///
/// Nothing is added to the response.
pub async fn request_logger(req: Request, next: Next) -> Response {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        timestamp = %now_iso8601(),
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
        "Request received"
    );

    next.run(req).await
}
