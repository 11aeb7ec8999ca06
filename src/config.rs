//! Configuration for samplerctl
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Main configuration for an LSCP client instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Server host name or address
    pub host: String,

    /// Server TCP port (LinuxSampler default is 8888)
    pub port: u16,

    /// Timeout applied to connect, read and write socket operations
    pub timeout: Duration,

    // -------------------------------------------------------------------------
    // Exchange Configuration
    // -------------------------------------------------------------------------
    /// Chunk size for each socket read while scanning for the delimiter
    pub recv_buflen: usize,

    /// Promote `WRN` status lines to hard errors instead of logging them
    pub warnings_as_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            timeout: Duration::from_secs(5),
            recv_buflen: 4096,
            warnings_as_errors: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The `host:port` address string for connecting
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host name or address
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the socket timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the receive chunk size
    pub fn recv_buflen(mut self, len: usize) -> Self {
        self.config.recv_buflen = len;
        self
    }

    /// Treat `WRN` status lines as fatal errors
    pub fn warnings_as_errors(mut self, enabled: bool) -> Self {
        self.config.warnings_as_errors = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
