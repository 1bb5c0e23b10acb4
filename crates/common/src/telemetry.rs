//! Tracing subscriber setup shared by binaries

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::{Error, Result};

/// Install the global tracing subscriber.
///
/// `filter` uses `RUST_LOG` syntax. Fails if the filter does not parse or a
/// subscriber is already installed.
#[mutants::skip] // Installs process-global state; covered by the binary
pub fn init_tracing(format: LogFormat, filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| Error::Configuration(format!("Invalid log filter '{}': {}", filter, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    let installed = match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| Error::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
