//! Unified error types for all layers of the ticket cache.

use thiserror::Error;

/// Unified error type for all layers of Gatepass.
///
/// The taxonomy is deliberately small: malformed caller input, an
/// unreachable backing store, and invalid construction-time settings.
/// A missing ticket is never an error; lookups report absence as `Ok(None)`.
#[derive(Error, Debug)]
pub enum GatepassError {
    /// Malformed caller-supplied argument, rejected before any network call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing ticket store could not complete an operation
    #[error("Ticket store unavailable: {0}")]
    StoreUnavailable(String),

    /// Invalid connection or pool settings
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatepassError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a store unavailable error.
    #[must_use]
    pub fn store_unavailable<T: Into<String>>(message: T) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Checks if this error is retriable.
    ///
    /// Gatepass itself never retries; the flag tells the embedding
    /// application whether retrying the operation can succeed.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
