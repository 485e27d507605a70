//! Function module
//!
//! The HTTP-triggered function: takes an invocation event, dispatches on the
//! HTTP verb and returns a serverless-style response envelope.

mod event;
mod handler;
mod response;

pub use event::{InvocationContext, InvocationEvent};
pub use handler::invoke;
pub use response::FunctionResponse;
