// Application state module
// Shared, read-only state handed to every connection

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::types::Config;
use crate::function::InvocationContext;

/// Application state
pub struct AppState {
    pub config: Config,
    pub active_connections: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            active_connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Invocation context for one request
    pub fn context(&self, request_id: Option<String>) -> InvocationContext {
        InvocationContext {
            request_id,
            function_name: self.config.server.function_name.clone(),
        }
    }
}
