//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::{Error, Result};

/// Definition version of on-disk project state understood by this build
pub const DEFAULT_DEFINITION_VERSION: &str = "0.4.0";

/// Base URL that error messages point users to
pub const DEFAULT_DOCS_BASE_URL: &str = "https://tableau.dev/docs";

/// How thoroughly project state is checked before a project is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Restricted runtime: state must always be supplied and is only version-gated
    Embedded,
    /// Complete editing runtime: state is optional and deep-validated when present
    #[default]
    Full,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::Full => write!(f, "full"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" | "embedded" => Ok(Self::Embedded),
            "full" | "studio" => Ok(Self::Full),
            other => Err(Error::Configuration(format!(
                "Unknown distribution '{}', expected 'core' or 'full'",
                other
            ))),
        }
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::Configuration(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Distribution the host runs as (core or full)
    pub validation_mode: ValidationMode,

    /// Development builds check identifier shape even in core
    pub development: bool,

    /// Expected `definitionVersion` of supplied project state
    #[validate(length(min = 1))]
    pub definition_version: String,

    /// Documentation pointer included in error messages
    #[validate(url)]
    pub docs_base_url: String,

    /// Runtime configuration
    pub log_format: LogFormat,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::default(),
            development: false,
            definition_version: DEFAULT_DEFINITION_VERSION.to_string(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            log_format: LogFormat::default(),
            rust_log: "tableau=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let validation_mode = match env::var("TABLEAU_DISTRIBUTION") {
            Ok(value) => value.parse()?,
            Err(_) => ValidationMode::default(),
        };

        let development = env::var("TABLEAU_ENV")
            .map(|value| value.eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        let log_format = match env::var("LOG_FORMAT") {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        let config = Self {
            validation_mode,
            development,
            definition_version: env::var("TABLEAU_DEFINITION_VERSION")
                .unwrap_or_else(|_| DEFAULT_DEFINITION_VERSION.to_string()),
            docs_base_url: env::var("TABLEAU_DOCS_URL")
                .unwrap_or_else(|_| DEFAULT_DOCS_BASE_URL.to_string()),
            log_format,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "tableau=info".to_string()),
        };

        config
            .validate()
            .map_err(|e| Error::Configuration(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}
