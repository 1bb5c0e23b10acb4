//! Persisted project state as handed to the registry
//!
//! The document is kept as raw JSON. Its shape is only trusted after it has
//! passed shallow or deep validation.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Key holding the schema revision a document was authored against
pub const DEFINITION_VERSION_KEY: &str = "definitionVersion";

/// Key holding the per-path timeline templates
pub const TIMELINE_TEMPLATES_KEY: &str = "timelineTemplates";

/// Opaque on-disk state document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OnDiskState(Value);

impl OnDiskState {
    /// Minimal well-formed document for the given definition version
    pub fn empty(definition_version: &str) -> Self {
        OnDiskState(json!({
            DEFINITION_VERSION_KEY: definition_version,
            "revision": format!("r{:x}", Utc::now().timestamp_micros()),
            TIMELINE_TEMPLATES_KEY: {},
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether the document is a blank placeholder (`null`, `false`, `0` or
    /// `""`) that stands for "no state"
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    /// Raw `definitionVersion`, absent for non-objects
    pub fn definition_version(&self) -> Option<&Value> {
        self.0.get(DEFINITION_VERSION_KEY)
    }

    /// Template stored for a sanitised timeline path
    pub fn timeline_template(&self, path: &str) -> Option<&Value> {
        self.0.get(TIMELINE_TEMPLATES_KEY)?.get(path)
    }
}

impl From<Value> for OnDiskState {
    fn from(value: Value) -> Self {
        OnDiskState(value)
    }
}

impl From<OnDiskState> for Value {
    fn from(state: OnDiskState) -> Self {
        state.0
    }
}

/// Configuration accepted when creating a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Previously exported state; JSON `null` counts as absent
    #[serde(default)]
    pub state: Option<OnDiskState>,
}

impl ProjectConfig {
    pub fn with_state(state: impl Into<OnDiskState>) -> Self {
        Self {
            state: Some(state.into()),
        }
    }
}
