use axum::{routing::post, Json, Router};
use service_core::middleware::DecodedBody;

use super::fallback::route_not_found;
use crate::models::{InvalidPayload, NotificationPayload, NotificationResponse};
use crate::startup::AppState;

pub const NOTIFICATION_PREFIX: &str = "/notification";
pub const CREATE_NOTIFICATION_PATH: &str = "/create-new-notification";
pub const NOTIFICATION_ENDPOINT: &str = "/notification/create-new-notification";

/// Routes mounted under [`NOTIFICATION_PREFIX`].
pub fn router() -> Router<AppState> {
    Router::new().route(
        CREATE_NOTIFICATION_PATH,
        post(create_notification).fallback(route_not_found),
    )
}

/// Validate `content` and acknowledge it.
///
/// Validation failures answer 400 directly. Bodies that fail to decode are
/// forwarded to the error responder by the decoding stage before routing.
#[tracing::instrument(skip(body))]
pub async fn create_notification(
    body: DecodedBody,
) -> Result<Json<NotificationResponse>, InvalidPayload> {
    let payload = NotificationPayload::from_body(&body.0)?;
    Ok(Json(NotificationResponse::acknowledge(&payload)))
}
