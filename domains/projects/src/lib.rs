//! Projects domain: project registry, on-disk state validation, timelines

pub mod domain;
pub mod error;
pub mod facade;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

// Re-export domain types at the crate root for convenience
pub use domain::diagnostics::{
    DiagnosticReport, DiagnosticSink, RecordingDiagnosticSink, TracingDiagnosticSink,
};
pub use domain::identifier::{describe_value_type, ProjectId, MIN_PROJECT_ID_LENGTH};
pub use domain::on_disk::{OnDiskState, ProjectConfig};
pub use domain::schema::{SchemaViolation, StateSchema};
pub use domain::slashed_path::{sanitise_slashed_path, validate_and_sanitise_slashed_path};
pub use domain::state::{ReadinessEvent, ReadinessState, ReadinessStateMachine};
pub use domain::timeline::{TimelineInstance, DEFAULT_INSTANCE_ID};
pub use error::{ProjectError, Result};
pub use facade::Project;
pub use registry::{ProjectRegistry, RegistryOptions};
pub use tableau_common::ValidationMode;
