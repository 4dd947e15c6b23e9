//! notification-service: accepts new content over HTTP and acknowledges it.

pub mod config;
pub mod handlers;
pub mod models;
pub mod startup;

pub use startup::{AppState, Application};
