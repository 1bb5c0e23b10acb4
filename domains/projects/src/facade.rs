//! User-facing facade over a registered project

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::ProjectHandle;
use crate::domain::identifier::ProjectId;
use crate::domain::on_disk::OnDiskState;
use crate::domain::timeline::{TimelineInstance, DEFAULT_INSTANCE_ID};
use crate::error::Result;

/// Handle to a validated project.
///
/// Obtained from `ProjectRegistry::create_project` or `ProjectRegistry::get`.
/// Clones refer to the same underlying project.
#[derive(Clone)]
pub struct Project {
    handle: Arc<ProjectHandle>,
}

impl Project {
    pub(crate) fn new(handle: Arc<ProjectHandle>) -> Self {
        Self { handle }
    }

    pub fn id(&self) -> &ProjectId {
        self.handle.id()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.handle.created_at()
    }

    /// Accepted on-disk state, `None` while loading or when started empty
    pub fn state(&self) -> Result<Option<OnDiskState>> {
        self.handle.state()
    }

    pub fn is_ready(&self) -> bool {
        self.handle.readiness().is_terminal()
    }

    /// Resolves once the project is ready
    pub async fn ready(&self) -> Result<()> {
        self.handle.ready().await
    }

    /// Supply persisted state to a project created without any.
    ///
    /// Fails if the project is already ready or the state does not pass deep
    /// validation.
    pub fn hydrate(&self, state: Option<OnDiskState>) -> Result<()> {
        self.handle.hydrate(state)
    }

    /// The default instance of the timeline at `path`
    pub fn get_timeline(&self, path: &str) -> Result<Arc<TimelineInstance>> {
        self.get_timeline_instance(path, DEFAULT_INSTANCE_ID)
    }

    /// A named instance of the timeline at `path`
    pub fn get_timeline_instance(
        &self,
        path: &str,
        instance_id: &str,
    ) -> Result<Arc<TimelineInstance>> {
        self.handle.timeline(path, instance_id)
    }

    /// Whether both facades wrap the same registered project
    pub fn same_project(&self, other: &Project) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("id", self.id())
            .field("ready", &self.is_ready())
            .finish()
    }
}
