// Invocation input types

use serde::Deserialize;

/// Method assumed when the event carries no `httpMethod` key
const DEFAULT_METHOD: &str = "GET";

fn default_method() -> Option<String> {
    Some(DEFAULT_METHOD.to_string())
}

/// Trigger payload. Only the HTTP method is read; other fields are ignored.
///
/// A missing `httpMethod` means GET; an explicit `null` is no method at all
/// and gets rejected like any unsupported verb.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default = "default_method")]
    pub http_method: Option<String>,
}

impl Default for InvocationEvent {
    fn default() -> Self {
        Self {
            http_method: default_method(),
        }
    }
}

impl InvocationEvent {
    pub fn with_method(method: impl Into<String>) -> Self {
        Self {
            http_method: Some(method.into()),
        }
    }

    /// Empty when the event carried `"httpMethod": null`
    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or_default()
    }
}

/// Invocation metadata. Logged, never used for business logic.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
    pub function_name: String,
}
