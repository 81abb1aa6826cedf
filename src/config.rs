//! Application configuration.
//!
//! The listen port is fixed. Only logging is read from the environment, and
//! unusable logging settings fall back to defaults rather than failing.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, SidecarError};

/// Port the sidecar listens on, on all interfaces.
pub const LISTEN_PORT: u16 = 8060;

/// Logging configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit JSON log lines instead of plain text.
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load and validate, falling back to defaults when the environment
    /// holds unusable logging settings.
    ///
    /// The rejected error is handed back so it can be logged once the
    /// subscriber is installed.
    pub fn load_or_default() -> (Self, Option<SidecarError>) {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self>) -> (Self, Option<SidecarError>) {
        match loaded.and_then(|config| config.validate().map(|()| config)) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.rust_log)
            .map_err(|e| SidecarError::InvalidConfig(format!("RUST_LOG: {e}")))?;
        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT))
    }
}
