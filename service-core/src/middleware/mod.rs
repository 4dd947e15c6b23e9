pub mod body;
pub mod error;
pub mod logging;
pub mod tracing;

pub use body::{decode_body, DecodedBody, BODY_LIMIT};
pub use error::{error_responder, forward_panic, ErrorVerbosity};
pub use logging::request_logger;
pub use self::tracing::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
