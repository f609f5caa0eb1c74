//! API Lambda handler and request processing

pub mod handler;
pub mod request;
pub mod response;

// Re-export the main handler for convenience
pub use handler::{handle_request, handler};
pub use request::ApiRequest;
pub use response::ApiResponse;
