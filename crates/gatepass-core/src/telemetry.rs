//! Tracing subscriber setup for embedding applications.
//!
//! Library code in Gatepass only emits `tracing` events; the hosting binary
//! decides where they go by calling [`init_tracing`] once at startup.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{GatepassError, GatepassResult};

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level. Returns a `Configuration` error if a global subscriber is already
/// installed.
pub fn init_tracing(config: &TelemetryConfig) -> GatepassResult<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| {
        GatepassError::configuration(format!("Failed to initialize tracing: {}", e))
    })?;

    debug!("Tracing initialized with format: {}", config.log_format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_telemetry_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "pretty");
    }

    #[test]
    fn test_init_tracing_rejects_double_install() {
        let config = TelemetryConfig::default();
        assert!(init_tracing(&config).is_ok());

        match init_tracing(&config).unwrap_err() {
            GatepassError::Configuration(message) => {
                assert!(message.contains("tracing"));
            }
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }
}
