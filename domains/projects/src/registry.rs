//! Project registry: the gate every project passes through
//!
//! The registry owns the mapping from project id to live handle. It checks
//! uniqueness, identifier shape and supplied state before a handle exists,
//! and never changes on a failed creation.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;
use tableau_common::config::{Config, DEFAULT_DEFINITION_VERSION, DEFAULT_DOCS_BASE_URL};
use tableau_common::ValidationMode;

use crate::domain::diagnostics::{DiagnosticSink, TracingDiagnosticSink};
use crate::domain::entities::ProjectHandle;
use crate::domain::identifier::{require_string_id, validate_id_shape, ProjectId};
use crate::domain::on_disk::ProjectConfig;
use crate::domain::schema::StateSchema;
use crate::domain::validation::{deep_validate, shallow_validate, state_persistence_url};
use crate::error::{ProjectError, Result};
use crate::facade::Project;

/// Settings fixed for the lifetime of a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    pub mode: ValidationMode,
    /// Check identifier shape even in the embedded distribution
    pub development: bool,
    pub definition_version: String,
    pub docs_base_url: String,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Full,
            development: false,
            definition_version: DEFAULT_DEFINITION_VERSION.to_string(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
        }
    }
}

impl RegistryOptions {
    pub fn embedded() -> Self {
        Self {
            mode: ValidationMode::Embedded,
            ..Self::default()
        }
    }

    pub fn full() -> Self {
        Self::default()
    }

    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    pub fn with_definition_version(mut self, version: impl Into<String>) -> Self {
        self.definition_version = version.into();
        self
    }

    pub fn with_docs_base_url(mut self, url: impl Into<String>) -> Self {
        self.docs_base_url = url.into();
        self
    }

    /// Whether identifier whitespace and length are checked
    pub fn checks_identifier_shape(&self) -> bool {
        self.development || self.mode == ValidationMode::Full
    }
}

impl From<&Config> for RegistryOptions {
    fn from(config: &Config) -> Self {
        Self {
            mode: config.validation_mode,
            development: config.development,
            definition_version: config.definition_version.clone(),
            docs_base_url: config.docs_base_url.clone(),
        }
    }
}

/// Everything a handle needs to validate state after registration
pub(crate) struct ValidationContext {
    pub(crate) options: RegistryOptions,
    pub(crate) schema: StateSchema,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
}

pub struct ProjectRegistry {
    context: Arc<ValidationContext>,
    projects: Mutex<HashMap<String, Arc<ProjectHandle>>>,
}

impl ProjectRegistry {
    /// Create a registry that reports diagnostics through tracing
    pub fn new(options: RegistryOptions) -> Result<Self> {
        Self::with_sink(options, Arc::new(TracingDiagnosticSink))
    }

    /// Create a registry with a custom diagnostic sink
    pub fn with_sink(options: RegistryOptions, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        let schema = StateSchema::compile(&options.definition_version)?;
        Ok(Self {
            context: Arc::new(ValidationContext {
                options,
                schema,
                sink,
            }),
            projects: Mutex::new(HashMap::new()),
        })
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.context.options
    }

    /// Validate and register a new project.
    ///
    /// `id` is taken as a dynamic value so that non-string ids coming from
    /// configuration are reported with their actual type.
    pub fn create_project(&self, id: impl Into<Value>, config: ProjectConfig) -> Result<Project> {
        let id = id.into();
        let options = &self.context.options;

        if let Some(raw) = id.as_str() {
            if self.lock()?.contains_key(raw) {
                return Err(ProjectError::DuplicateProject { id: raw.to_string() });
            }
        }

        let raw = require_string_id(&id)?;
        if options.checks_identifier_shape() {
            validate_id_shape(raw)?;
        }
        let project_id = ProjectId::unchecked(raw.to_string());
        let state = config.state.filter(|state| !state.is_blank());

        match options.mode {
            ValidationMode::Embedded => {
                let state = state.as_ref().ok_or_else(|| ProjectError::MissingState {
                    id: raw.to_string(),
                    docs_url: state_persistence_url(&options.docs_base_url),
                })?;
                shallow_validate(
                    raw,
                    state,
                    &options.definition_version,
                    &options.docs_base_url,
                )?;
            }
            ValidationMode::Full => {
                if let Some(state) = &state {
                    deep_validate(
                        raw,
                        state,
                        &self.context.schema,
                        self.context.sink.as_ref(),
                        &options.docs_base_url,
                    )?;
                }
            }
        }

        let handle = {
            let mut projects = self.lock()?;
            match projects.entry(project_id.to_string()) {
                Entry::Occupied(_) => {
                    return Err(ProjectError::DuplicateProject {
                        id: project_id.to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    let handle = Arc::new(ProjectHandle::new(
                        project_id,
                        state,
                        Arc::clone(&self.context),
                    ));
                    slot.insert(Arc::clone(&handle));
                    handle
                }
            }
        };

        tracing::info!(
            project_id = %handle.id(),
            mode = %options.mode,
            readiness = %handle.readiness(),
            "Project registered"
        );

        Ok(Project::new(handle))
    }

    /// Facade over an already registered project
    pub fn get(&self, id: &str) -> Option<Project> {
        self.read_projects("get", |projects| {
            projects
                .get(id)
                .map(|handle| Project::new(Arc::clone(handle)))
        })
        .flatten()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read_projects("contains", |projects| projects.contains_key(id)).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.read_projects("len", |projects| projects.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered ids in sorted order
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .read_projects("ids", |projects| projects.keys().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<ProjectHandle>>>> {
        self.projects
            .lock()
            .map_err(|e| ProjectError::Internal(format!("project registry lock poisoned: {e}")))
    }

    /// Run a read-only query, logging instead of failing when the map is poisoned
    fn read_projects<T>(
        &self,
        operation: &'static str,
        query: impl FnOnce(&HashMap<String, Arc<ProjectHandle>>) -> T,
    ) -> Option<T> {
        match self.lock() {
            Ok(projects) => Some(query(&projects)),
            Err(e) => {
                tracing::error!(operation, error = %e, "Project registry unavailable");
                None
            }
        }
    }
}

impl std::fmt::Debug for ProjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectRegistry")
            .field("options", &self.context.options)
            .field("projects", &self.ids())
            .finish()
    }
}
