use chrono::{SecondsFormat, Utc};
use std::sync::OnceLock;
use std::time::Instant;

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

/// Instant the process started. The first call fixes it, so binaries call
/// this at the top of `main`.
pub fn process_start() -> Instant {
    *PROCESS_START.get_or_init(Instant::now)
}

/// Current UTC time as an ISO-8601 string with millisecond precision, e.g.
/// `2024-05-01T12:30:45.123Z`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
