//! Server configuration loaded from environment variables.

/// Bind address; all interfaces.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration.
///
/// The listen address is compiled in (`0.0.0.0:8080`). The only value read
/// from the environment is `RUST_LOG`, the tracing filter directive
/// (default: `"info"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Loads the log filter from the environment; host and port stay fixed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            ..Self::default()
        }
    }

    /// Returns a default configuration listening on `port`.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
