//! Application configuration structures.

use gatepass_core::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Ticket cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppMetadata::default(),
            cache: CacheConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "gatepass".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Ticket cache (Redis) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis URL.
    pub url: String,
    /// Connection pool size.
    pub pool_size: usize,
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Timeout waiting for a free pooled connection in seconds.
    pub wait_timeout_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
            connect_timeout_secs: 5,
            wait_timeout_secs: 2,
        }
    }
}

impl CacheConfig {
    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the pooled-connection wait timeout as a Duration.
    #[must_use]
    pub const fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}
