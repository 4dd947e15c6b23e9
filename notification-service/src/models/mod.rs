pub mod notification;

pub use notification::{InvalidPayload, NotificationPayload, NotificationResponse};
