//! Errors raised while creating and using projects
//!
//! Every variant is terminal for the call that produced it. Messages are
//! written for the developer embedding the library and point at the docs
//! where that helps.

use thiserror::Error;

/// Projects domain result type
pub type Result<T> = std::result::Result<T, ProjectError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectError {
    #[error("Looks like project \"{id}\" is being created twice. If you're trying to make two separate projects, make sure to assign a unique id to each of them.")]
    DuplicateProject { id: String },

    #[error("Project id must be a string. Instead, it was {actual}.")]
    InvalidIdentifierType { actual: String },

    #[error("Project id \"{id}\" should not have surrounding whitespace.")]
    InvalidIdentifierWhitespace { id: String },

    #[error("Project id \"{id}\" should be at least {min_length} characters long.")]
    InvalidIdentifierLength { id: String, min_length: usize },

    #[error("config.state for project \"{id}\" cannot be empty in the embedded distribution. Read more at {docs_url}")]
    MissingState { id: String, docs_url: String },

    #[error("Error validating config.state for project \"{id}\". The state seems to be formatted in a way that is unreadable. Read more at {docs_url}")]
    MalformedState { id: String, docs_url: String },

    #[error("config.state for project \"{id}\" is invalid ({violations} problem(s) logged). Learn how to fix this at {docs_url}")]
    InvalidStateSchema {
        id: String,
        violations: usize,
        docs_url: String,
    },

    #[error("The path in {caller}(\"{path}\") {reason}")]
    InvalidTimelinePath {
        caller: String,
        path: String,
        reason: String,
    },

    #[error("Project \"{id}\" cannot {action}: {reason}")]
    InvalidLifecycle {
        id: String,
        action: String,
        reason: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProjectError {
    /// Stable code distinguishing the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ProjectError::DuplicateProject { .. } => "DUPLICATE_PROJECT",
            ProjectError::InvalidIdentifierType { .. } => "INVALID_IDENTIFIER_TYPE",
            ProjectError::InvalidIdentifierWhitespace { .. } => "INVALID_IDENTIFIER_WHITESPACE",
            ProjectError::InvalidIdentifierLength { .. } => "INVALID_IDENTIFIER_LENGTH",
            ProjectError::MissingState { .. } => "MISSING_STATE",
            ProjectError::MalformedState { .. } => "MALFORMED_STATE",
            ProjectError::InvalidStateSchema { .. } => "INVALID_STATE_SCHEMA",
            ProjectError::InvalidTimelinePath { .. } => "INVALID_TIMELINE_PATH",
            ProjectError::InvalidLifecycle { .. } => "INVALID_LIFECYCLE",
            ProjectError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ProjectError> for tableau_common::Error {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::DuplicateProject { .. } => tableau_common::Error::Conflict(err.to_string()),
            ProjectError::Internal(msg) => tableau_common::Error::Internal(msg),
            other => tableau_common::Error::Validation(other.to_string()),
        }
    }
}
