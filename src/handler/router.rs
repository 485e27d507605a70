use crate::config::AppState;
use crate::function::{self, InvocationEvent};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

const REQUEST_ID_HEADER: &str = "x-request-id";

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Route one request: health probes answer directly, everything else is an invocation
fn route<B>(req: &Request<B>, state: &AppState, request_id: Option<String>) -> Response<Full<Bytes>> {
    let method = req.method();
    let path = req.uri().path();

    if state.config.health.is_probe(path) && (method == Method::GET || method == Method::HEAD) {
        return http::build_health_response(method == Method::HEAD);
    }

    let event = InvocationEvent::with_method(method.as_str());
    let context = state.context(request_id);
    let resp = function::invoke(&event, &context);
    http::build_function_response(&resp, &state.config.http.server_name)
}

/// hyper service entry: route, then write the access log line
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let request_id = header_string(&req, REQUEST_ID_HEADER);

    let response = route(&req, &state, request_id.clone());

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = format!("{:?}", req.version())
            .trim_start_matches("HTTP/")
            .to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = hyper::body::Body::size_hint(response.body())
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        entry.request_id = request_id;
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}
