// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config;
use crate::logger;

/// Accept loop. Returns once shutdown is requested; in-flight connections
/// keep running on their own tasks.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    signals: Arc<SignalHandler>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            _ = signals.shutdown.notified() => {
                logger::log_shutdown(state.active_connections.load(Ordering::SeqCst));
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::listener::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[tokio::test]
    async fn test_serves_options_then_shuts_down() {
        let mut cfg = Config::load_from("does-not-exist/city-news").unwrap();
        cfg.logging.access_log = false;
        let state = Arc::new(config::AppState::new(&cfg));
        let signals = Arc::new(SignalHandler::new());

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let server = tokio::task::spawn_local(start_server_loop(
                    listener,
                    Arc::clone(&state),
                    Arc::clone(&signals),
                ));

                let mut client = tokio::net::TcpStream::connect(addr).await.unwrap();
                client
                    .write_all(b"OPTIONS / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
                    .await
                    .unwrap();
                let mut raw = Vec::new();
                client.read_to_end(&mut raw).await.unwrap();
                let text = String::from_utf8_lossy(&raw).to_lowercase();
                assert!(text.starts_with("http/1.1 200"));
                assert!(text.contains("access-control-allow-methods: get, options"));

                signals.request_shutdown();
                assert!(server.await.unwrap().is_ok());
            })
            .await;
    }
}
