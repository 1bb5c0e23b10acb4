//! Project identifiers and their shape rules

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{ProjectError, Result};

/// Minimum length of a trimmed project id, in characters
pub const MIN_PROJECT_ID_LENGTH: usize = 3;

/// Identifier of a registered project
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create an id after checking its shape
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_id_shape(&id)?;
        Ok(ProjectId(id))
    }

    /// Wrap an id whose shape has not been checked.
    ///
    /// The embedded distribution skips shape checks outside development.
    pub(crate) fn unchecked(id: String) -> Self {
        ProjectId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

/// Extract the identifier string, rejecting every other JSON type
pub fn require_string_id(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| ProjectError::InvalidIdentifierType {
            actual: describe_value_type(value),
        })
}

/// Check surrounding whitespace and minimum length
pub fn validate_id_shape(id: &str) -> Result<()> {
    let trimmed = id.trim_matches(is_trimmable);
    if trimmed.len() != id.len() {
        return Err(ProjectError::InvalidIdentifierWhitespace { id: id.to_string() });
    }

    if trimmed.chars().count() < MIN_PROJECT_ID_LENGTH {
        return Err(ProjectError::InvalidIdentifierLength {
            id: id.to_string(),
            min_length: MIN_PROJECT_ID_LENGTH,
        });
    }

    Ok(())
}

/// Whitespace, including the byte order mark
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Describe a value's runtime type for error messages, e.g. `number (42)`
pub fn describe_value_type(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("a boolean ({})", b),
        Value::Number(n) => format!("a number ({})", n),
        Value::String(s) => format!("a string (\"{}\")", s),
        Value::Array(items) => format!("an array of length {}", items.len()),
        Value::Object(_) => "an object".to_string(),
    }
}
