//! HTTP handlers for notification-service.

pub mod app;
pub mod fallback;
pub mod health;
pub mod notification;

pub use app::index;
pub use fallback::route_not_found;
pub use health::health_check;
pub use notification::create_notification;
