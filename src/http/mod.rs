//! HTTP protocol layer module
//!
//! Turns function responses and probe answers into hyper responses.

pub mod response;

// Re-export commonly used types
pub use response::{build_function_response, build_health_response};
