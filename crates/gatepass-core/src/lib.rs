//! # Gatepass Core
//!
//! Core types, error definitions, and telemetry setup for Gatepass.
//! This crate provides the foundational abstractions shared by the
//! configuration and ticket-cache layers.

pub mod error;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use error::*;
pub use result::*;
pub use telemetry::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
