//! Sanitising and validating slashed timeline paths like `Scene / Intro`

use regex::Regex;

use crate::error::{ProjectError, Result};

/// Maximum characters allowed in one path component
pub const MAX_COMPONENT_LENGTH: usize = 32;

lazy_static::lazy_static! {
    static ref LEADING_SEPARATORS: Regex = Regex::new(r"^[\s/]+").unwrap();
    static ref TRAILING_SEPARATORS: Regex = Regex::new(r"[\s/]+$").unwrap();
    static ref SEPARATOR: Regex = Regex::new(r"\s*/\s*").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s\s+").unwrap();
}

/// Normalise a path: no outer slashes or whitespace, every separator written
/// as `" / "`, whitespace runs collapsed to one space.
pub fn sanitise_slashed_path(path: &str) -> String {
    let path = LEADING_SEPARATORS.replace(path, "");
    let path = TRAILING_SEPARATORS.replace(&path, "");
    let path = SEPARATOR.replace_all(&path, " / ");
    WHITESPACE_RUN.replace_all(&path, " ").into_owned()
}

/// Reason a sanitised path is unusable, if any
pub fn slashed_path_problem(sanitised: &str) -> Option<String> {
    for (index, component) in sanitised.split('/').enumerate() {
        let component = component.trim();
        if component.is_empty() {
            return Some(format!("has an empty component (#{}).", index + 1));
        }
        if component.chars().count() > MAX_COMPONENT_LENGTH {
            return Some(format!(
                "has a component '{}' longer than {} characters.",
                component, MAX_COMPONENT_LENGTH
            ));
        }
    }
    None
}

/// Sanitise `path` and reject it if it is still unusable.
///
/// `caller` names the public method in the error message. With `warn_on_change`
/// set, a path that had to be rewritten is logged.
pub fn validate_and_sanitise_slashed_path(
    path: &str,
    caller: &str,
    warn_on_change: bool,
) -> Result<String> {
    let sanitised = sanitise_slashed_path(path);

    if let Some(reason) = slashed_path_problem(&sanitised) {
        return Err(ProjectError::InvalidTimelinePath {
            caller: caller.to_string(),
            path: path.to_string(),
            reason,
        });
    }

    if warn_on_change && sanitised != path {
        tracing::warn!(
            caller,
            original = %path,
            sanitised = %sanitised,
            "Timeline path was sanitised"
        );
    }

    Ok(sanitised)
}
