//! Shallow and deep validation of supplied project state

use serde_json::Value;

use crate::domain::diagnostics::{DiagnosticReport, DiagnosticSink};
use crate::domain::on_disk::OnDiskState;
use crate::domain::schema::StateSchema;
use crate::error::{ProjectError, Result};

/// Docs page on persisting and restoring project state
pub fn state_persistence_url(docs_base_url: &str) -> String {
    format!(
        "{}/state-persistence.html",
        docs_base_url.trim_end_matches('/')
    )
}

/// Docs section on fixing invalid project state
pub fn troubleshooting_url(docs_base_url: &str) -> String {
    format!("{}#troubleshooting", state_persistence_url(docs_base_url))
}

/// Version-and-shape gate used by the embedded distribution.
///
/// Does not look at any field besides `definitionVersion`.
pub fn shallow_validate(
    id: &str,
    state: &OnDiskState,
    expected_version: &str,
    docs_base_url: &str,
) -> Result<()> {
    let value = state.as_value();
    let readable = !value.is_array()
        && !value.is_null()
        && state.definition_version() == Some(&Value::String(expected_version.to_string()));

    if !readable {
        tracing::debug!(project_id = %id, "Shallow state validation failed");
        return Err(ProjectError::MalformedState {
            id: id.to_string(),
            docs_url: state_persistence_url(docs_base_url),
        });
    }

    Ok(())
}

/// Full structural validation used by the editing distribution.
///
/// On failure every violation is written to `sink` as one grouped report.
pub fn deep_validate(
    id: &str,
    state: &OnDiskState,
    schema: &StateSchema,
    sink: &dyn DiagnosticSink,
    docs_base_url: &str,
) -> Result<()> {
    let violations = schema.violations(state.as_value());
    if violations.is_empty() {
        return Ok(());
    }

    let docs_url = troubleshooting_url(docs_base_url);
    tracing::warn!(
        project_id = %id,
        violations = violations.len(),
        "Rejecting project state that does not match the schema"
    );

    sink.report(&DiagnosticReport {
        project_id: id.to_string(),
        header: format!(
            "config.state for project \"{}\" is invalid. Learn how to fix this at {}",
            id, docs_url
        ),
        lines: violations.iter().map(|v| v.render()).collect(),
    });

    Err(ProjectError::InvalidStateSchema {
        id: id.to_string(),
        violations: violations.len(),
        docs_url,
    })
}
