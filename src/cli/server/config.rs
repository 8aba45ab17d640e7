//! Server configuration module
//!
//! Provides configuration structures for the formula API server.

use std::net::IpAddr;
use std::path::PathBuf;

/// Configuration for the formula API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host IP address to bind to
    pub host: IpAddr,
    /// Enable CORS for all origins (development mode)
    pub cors_all: bool,
    /// Maximum request body size in MB
    pub max_body_size_mb: u64,
    /// Directory that confines the read/write file actions
    pub storage_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: [127, 0, 0, 1].into(),
            cors_all: false,
            max_body_size_mb: 1,
            storage_dir: PathBuf::from("./storage"),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration with custom values
    pub fn new(
        port: u16,
        host: IpAddr,
        cors_all: bool,
        max_body_size_mb: u64,
        storage_dir: PathBuf,
    ) -> Self {
        Self {
            port,
            host,
            cors_all,
            max_body_size_mb,
            storage_dir,
        }
    }

    /// Get maximum payload size in bytes
    pub fn max_payload_size(&self) -> usize {
        (self.max_body_size_mb as usize) * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_localhost() {
        let config = ServerConfig::default();
        assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.max_payload_size(), 1024 * 1024);
    }
}
