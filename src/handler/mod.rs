//! Request handler module
//!
//! Bridges hyper requests to the news function and answers health probes.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
