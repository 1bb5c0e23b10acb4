//! Shared utilities, configuration, and error handling for Tableau
//!
//! This crate provides common functionality used across the Tableau workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Tracing subscriber setup
//! - State machine error types

pub mod config;
pub mod error;
pub mod state;
pub mod telemetry;

pub use config::{Config, LogFormat, ValidationMode};
pub use error::{Error, Result};
pub use state::StateError;
pub use telemetry::init_tracing;
