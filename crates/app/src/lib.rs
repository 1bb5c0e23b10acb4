//! Tableau host composition root
//!
//! Owns the process's project registry and wires it to configuration and
//! persisted state files.

use std::path::Path;
use std::time::Duration;

use tableau_common::{Config, Error, Result};
use tableau_projects::{OnDiskState, Project, ProjectConfig, ProjectRegistry, RegistryOptions};

/// How long the host waits for a project to become ready
pub const READY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the registry for this process from configuration
pub fn build_registry(config: &Config) -> Result<ProjectRegistry> {
    let registry = ProjectRegistry::new(RegistryOptions::from(config))?;
    tracing::info!(
        mode = %config.validation_mode,
        development = config.development,
        definition_version = %config.definition_version,
        "Project registry created"
    );
    Ok(registry)
}

/// Read a persisted state document from disk
pub fn load_state_file(path: &Path) -> Result<OnDiskState> {
    let contents = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    Ok(OnDiskState::from(value))
}

/// Register a project, optionally from a state file, and wait until it is ready.
///
/// A full-mode project registered without a state file is started empty.
pub async fn open_project(
    registry: &ProjectRegistry,
    id: &str,
    state_path: Option<&Path>,
) -> Result<Project> {
    let config = match state_path {
        Some(path) => ProjectConfig::with_state(load_state_file(path)?),
        None => ProjectConfig::default(),
    };

    let project = registry.create_project(id, config)?;
    if !project.is_ready() {
        project.hydrate(None)?;
    }

    tokio::time::timeout(READY_TIMEOUT, project.ready())
        .await
        .map_err(|_| Error::Internal(format!("Project \"{}\" did not become ready", id)))??;

    Ok(project)
}
