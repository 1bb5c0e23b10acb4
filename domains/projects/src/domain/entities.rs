//! Domain entities for Projects domain
//!
//! `ProjectHandle` is the live project behind a facade. It is created only by
//! the registry once every validation step has passed, and lives as long as
//! the registry that owns it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::domain::identifier::ProjectId;
use crate::domain::on_disk::OnDiskState;
use crate::domain::slashed_path::validate_and_sanitise_slashed_path;
use crate::domain::state::{ReadinessEvent, ReadinessState, ReadinessStateMachine};
use crate::domain::timeline::TimelineInstance;
use crate::domain::validation::deep_validate;
use crate::error::{ProjectError, Result};
use crate::registry::ValidationContext;

type TimelineKey = (String, String);

pub struct ProjectHandle {
    id: ProjectId,
    created_at: DateTime<Utc>,
    context: Arc<ValidationContext>,
    state: RwLock<Option<OnDiskState>>,
    readiness: watch::Sender<ReadinessState>,
    timelines: Mutex<HashMap<TimelineKey, Arc<TimelineInstance>>>,
}

impl ProjectHandle {
    /// Build a handle from state that has already been validated.
    ///
    /// A project without state starts loading; everything else starts ready.
    pub(crate) fn new(
        id: ProjectId,
        state: Option<OnDiskState>,
        context: Arc<ValidationContext>,
    ) -> Self {
        let initial = if state.is_some() {
            ReadinessState::Ready
        } else {
            ReadinessState::Loading
        };
        let (readiness, _) = watch::channel(initial);

        ProjectHandle {
            id,
            created_at: Utc::now(),
            context,
            state: RwLock::new(state),
            readiness,
            timelines: Mutex::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn readiness(&self) -> ReadinessState {
        *self.readiness.borrow()
    }

    /// Snapshot of the accepted on-disk state
    pub fn state(&self) -> Result<Option<OnDiskState>> {
        self.state
            .read()
            .map(|state| state.clone())
            .map_err(|e| ProjectError::Internal(format!("project state lock poisoned: {e}")))
    }

    /// Wait until the project is ready
    pub async fn ready(&self) -> Result<()> {
        let mut receiver = self.readiness.subscribe();
        receiver
            .wait_for(|state| *state == ReadinessState::Ready)
            .await
            .map(|_| ())
            .map_err(|e| ProjectError::Internal(format!("readiness channel closed: {e}")))
    }

    /// Supply the state of a loading project and mark it ready.
    ///
    /// Supplied state goes through deep validation; `None` starts the project
    /// empty. Validation runs before the state lock is taken, so sinks may
    /// read the project back.
    pub fn hydrate(&self, state: Option<OnDiskState>) -> Result<()> {
        self.hydrate_transition()?;

        if let Some(state) = &state {
            deep_validate(
                self.id.as_str(),
                state,
                &self.context.schema,
                self.context.sink.as_ref(),
                &self.context.options.docs_base_url,
            )?;
        }

        let mut current = self
            .state
            .write()
            .map_err(|e| ProjectError::Internal(format!("project state lock poisoned: {e}")))?;

        // Another hydration may have won while validation ran
        let next = self.hydrate_transition()?;
        *current = state;
        self.readiness.send_replace(next);
        drop(current);

        tracing::info!(project_id = %self.id, "Project hydrated and ready");
        Ok(())
    }

    fn hydrate_transition(&self) -> Result<ReadinessState> {
        ReadinessStateMachine::transition(self.readiness(), ReadinessEvent::Hydrate).map_err(|e| {
            ProjectError::InvalidLifecycle {
                id: self.id.to_string(),
                action: "be hydrated".to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Cached timeline instance for a path, created on first use
    pub fn timeline(
        self: &Arc<Self>,
        path: &str,
        instance_id: &str,
    ) -> Result<Arc<TimelineInstance>> {
        let path = validate_and_sanitise_slashed_path(
            path,
            "project.getTimeline",
            self.context.options.development,
        )?;

        let mut timelines = self
            .timelines
            .lock()
            .map_err(|e| ProjectError::Internal(format!("timeline cache lock poisoned: {e}")))?;

        let instance = timelines
            .entry((path.clone(), instance_id.to_string()))
            .or_insert_with(|| {
                tracing::debug!(
                    project_id = %self.id,
                    path = %path,
                    instance_id,
                    "Creating timeline instance"
                );
                Arc::new(TimelineInstance::new(
                    Arc::downgrade(self),
                    path.clone(),
                    instance_id.to_string(),
                ))
            });

        Ok(Arc::clone(instance))
    }
}

impl std::fmt::Debug for ProjectHandle {
    #[mutants::skip] // Debug output only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectHandle")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("readiness", &self.readiness())
            .finish_non_exhaustive()
    }
}
