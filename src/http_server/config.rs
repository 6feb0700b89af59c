//! HTTP Server Configuration
//!
//! Host, port and CORS allow-list for the movies API.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins echoed back in `Access-Control-Allow-Origin`
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:8080".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Replace the CORS allow-list. An empty list keeps the defaults.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors_origins = origins;
        }
        self
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:8080"]
        );
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_empty_origin_override_keeps_defaults() {
        let config = HttpServerConfig::default().with_cors_origins(vec![]);
        assert_eq!(config.cors_origins.len(), 2);

        let config = HttpServerConfig::default()
            .with_cors_origins(vec!["https://movies.example.com".to_string()]);
        assert_eq!(config.cors_origins, vec!["https://movies.example.com"]);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 4000}"#).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
    }
}
