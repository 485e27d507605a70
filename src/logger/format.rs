//! Access log format module
//!
//! Supports `combined`, `common`, `json` and custom `$variable` patterns.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Access log entry containing request/response information
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
    /// Invocation id, when the client sent one
    pub request_id: Option<String>,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
            request_id: None,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => format!(
                "{} \"{}\" \"{}\"",
                self.format_common(),
                escape_quoted(self.referer.as_deref().unwrap_or("-")),
                escape_quoted(self.user_agent.as_deref().unwrap_or("-")),
            ),
            "common" => self.format_common(),
            "json" => serde_json::to_string(self).unwrap_or_default(),
            custom => self.format_custom(custom),
        }
    }

    /// Request URI, escaped for use inside a quoted field
    fn request_uri(&self) -> String {
        let uri = match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        };
        escape_quoted(&uri)
    }

    fn time_local(&self) -> String {
        self.time.format("%d/%b/%Y:%H:%M:%S %z").to_string()
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time_local(),
            self.method,
            self.request_uri(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    /// Values for custom patterns, longest name first so `$request_time`
    /// wins over `$request`.
    fn variables(&self) -> Vec<(&'static str, String)> {
        let request_uri = self.request_uri();
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;
        let or_dash = |v: Option<&str>| escape_quoted(v.unwrap_or("-"));

        let mut vars = vec![
            ("$remote_addr", self.remote_addr.clone()),
            ("$time_local", self.time_local()),
            ("$time_iso8601", self.time.to_rfc3339()),
            ("$request_time", format!("{request_time:.3}")),
            ("$request_method", self.method.clone()),
            (
                "$request",
                format!("{} {request_uri} HTTP/{}", self.method, self.http_version),
            ),
            ("$request_uri", request_uri),
            ("$request_id", or_dash(self.request_id.as_deref())),
            ("$status", self.status.to_string()),
            ("$body_bytes_sent", self.body_bytes.to_string()),
            ("$http_referer", or_dash(self.referer.as_deref())),
            ("$http_user_agent", or_dash(self.user_agent.as_deref())),
        ];
        vars.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));
        vars
    }

    /// Custom format with variable substitution
    ///
    /// Variables: `$remote_addr`, `$time_local`, `$time_iso8601`, `$request`,
    /// `$request_method`, `$request_uri`, `$request_time`, `$request_id`,
    /// `$status`, `$body_bytes_sent`, `$http_referer`, `$http_user_agent`.
    /// The pattern is scanned once; substituted values are never rescanned.
    /// Unknown `$names` are kept verbatim.
    fn format_custom(&self, pattern: &str) -> String {
        let vars = self.variables();
        let mut out = String::with_capacity(pattern.len());
        let mut rest = pattern;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            match vars.iter().find(|(name, _)| tail.starts_with(name)) {
                Some((name, value)) => {
                    out.push_str(value);
                    rest = &tail[name.len()..];
                }
                None => {
                    out.push('$');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Escape characters that would break out of a quoted log field
fn escape_quoted(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
