//! HTTP response building module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Response, StatusCode};

use crate::function::FunctionResponse;

/// Render a function response as an HTTP response
///
/// Invalid header names or values are skipped with an error log.
pub fn build_function_response(resp: &FunctionResponse, server_name: &str) -> Response<Full<Bytes>> {
    let status = StatusCode::from_u16(resp.status_code).unwrap_or_else(|e| {
        log_build_error(&resp.status_code.to_string(), &e);
        StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut response = Response::new(Full::new(Bytes::from(resp.body.clone())));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (name, value) in &resp.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => crate::logger::log_error(&format!("Skipping invalid header {name}: {value}")),
        }
    }
    if let Ok(value) = HeaderValue::from_str(server_name) {
        headers.insert(hyper::header::SERVER, value);
    }

    response
}

/// Build health probe response
pub fn build_health_response(is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head { Bytes::new() } else { Bytes::from("ok") };
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .header("Cache-Control", "no-store")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &impl std::fmt::Display) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
