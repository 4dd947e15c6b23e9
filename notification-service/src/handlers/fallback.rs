use axum::{extract::OriginalUri, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteNotFound {
    pub error: String,
    pub path: String,
}

/// Catch-all for unknown paths and for known paths hit with an unregistered method.
///
/// `path` echoes the original URL, query string included.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<RouteNotFound>) {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
        .to_string();

    tracing::debug!(path = %path, "Route not found");

    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            error: "Route not found".to_string(),
            path,
        }),
    )
}
