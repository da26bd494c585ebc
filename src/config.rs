//! # Configuration
//!
//! Layered application configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/local.toml` (optional)
//! 4. Environment variables prefixed with `CATALOG__`, using `__` between
//!    nested keys, e.g. `CATALOG__SERVER__PORT=9000`
//!
//! # Examples
//!
//! ```
//! use music_catalog::config::{AppConfig, LogFormat};
//!
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [server]
//!     port = 9000
//!
//!     [logging]
//!     format = "json"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.server().port(), 9000);
//! assert_eq!(config.server().host(), "0.0.0.0");
//! assert_eq!(config.logging().format(), LogFormat::Json);
//! ```

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
const DEFAULT_PORT: u16 = 8888;

/// Default graceful shutdown drain time in seconds.
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

/// Default per-request deadline in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default log filter.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable prefix.
const ENV_PREFIX: &str = "CATALOG";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not acceptable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    host: String,
    port: u16,
    shutdown_timeout_secs: u64,
    request_timeout_ms: u64,
}

impl ServerConfig {
    /// Sets the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the bind port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the graceful shutdown drain time.
    #[must_use]
    pub fn with_shutdown_timeout_secs(mut self, secs: u64) -> Self {
        self.shutdown_timeout_secs = secs;
        self
    }

    /// Sets the per-request deadline.
    #[must_use]
    pub fn with_request_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    /// Returns the bind host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the bind port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns how long in-flight requests may drain after a shutdown signal.
    #[must_use]
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Returns the deadline attached to each request.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("server.host must not be empty"));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "server.request_timeout_ms must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    level: String,
    format: LogFormat,
}

impl LoggingConfig {
    /// Sets the log filter directive.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the log filter directive, e.g. `info` or `music_catalog=debug`.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Returns the output format.
    #[must_use]
    pub fn format(&self) -> LogFormat {
        self.format
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    server: ServerConfig,
    logging: LoggingConfig,
}

impl AppConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub fn new(server: ServerConfig, logging: LoggingConfig) -> Self {
        Self { server, logging }
    }

    /// Loads configuration from the optional config files and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is malformed and
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder)
    }

    /// Parses configuration from a TOML document, over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the document is malformed and
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.server.validate()?;
        Ok(config)
    }

    /// Returns the server settings.
    #[must_use]
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the logging settings.
    #[must_use]
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
