// Configuration module entry point
// Layers config file, environment and built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Default config file, without extension
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Environment variables override the file, e.g. `NEWS_SERVER__PORT=9000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("NEWS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.function_name", "city-news")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "city-news-fn")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Per-connection timeout: the larger of read and write timeouts
    pub fn connection_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(std::cmp::max(
            self.performance.read_timeout,
            self.performance.write_timeout,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::types::HealthConfig;
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/city-news").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.function_name, "city-news");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
        assert!(cfg.performance.max_connections.is_none());
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.liveness_path, "/healthz");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("does-not-exist/city-news").unwrap();
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_connection_timeout_takes_max() {
        let mut cfg = Config::load_from("does-not-exist/city-news").unwrap();
        cfg.performance.read_timeout = 5;
        cfg.performance.write_timeout = 12;
        assert_eq!(cfg.connection_timeout().as_secs(), 12);
    }

    #[test]
    fn test_health_probe_paths() {
        let mut health = HealthConfig::default();
        assert!(health.is_probe("/healthz"));
        assert!(health.is_probe("/readyz"));
        assert!(!health.is_probe("/"));
        health.enabled = false;
        assert!(!health.is_probe("/healthz"));
    }
}
