//! Timeline instances handed out by projects

use std::sync::Weak;

use serde_json::Value;

use crate::domain::entities::ProjectHandle;

/// Default instance id used by `Project::get_timeline`
pub const DEFAULT_INSTANCE_ID: &str = "default";

/// One playable instance of a timeline, identified by path and instance id
#[derive(Debug)]
pub struct TimelineInstance {
    project: Weak<ProjectHandle>,
    path: String,
    instance_id: String,
}

impl TimelineInstance {
    pub(crate) fn new(project: Weak<ProjectHandle>, path: String, instance_id: String) -> Self {
        Self {
            project,
            path,
            instance_id,
        }
    }

    /// Sanitised slashed path of the timeline
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Id of the owning project, if it is still alive
    pub fn project_id(&self) -> Option<String> {
        self.project.upgrade().map(|p| p.id().to_string())
    }

    /// The project's persisted template for this timeline path
    pub fn template_state(&self) -> Option<Value> {
        let project = self.project.upgrade()?;
        let state = project.state().ok()??;
        state.timeline_template(&self.path).cloned()
    }
}
