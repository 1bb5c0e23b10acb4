//! Host loader integration tests
//!
//! Opens projects from state files through `tableau-app`, the same path the
//! `local` binary takes.

mod common;

use std::io::Write;

use tableau_common::{Config, ValidationMode};

use crate::common::animated_state;

fn state_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_open_embedded_project_from_file() {
    let config = Config {
        validation_mode: ValidationMode::Embedded,
        ..Config::default()
    };
    let registry = tableau_app::build_registry(&config).unwrap();
    let file = state_file(&animated_state().to_string());

    let project = tableau_app::open_project(&registry, "from-disk", Some(file.path()))
        .await
        .unwrap();

    assert!(project.is_ready());
    let timeline = project.get_timeline("Scene / Intro").unwrap();
    assert!(timeline.template_state().is_some());
}

#[tokio::test]
async fn test_invalid_file_is_a_validation_error() {
    let registry = tableau_app::build_registry(&Config::default()).unwrap();
    let file = state_file(r#"{"definitionVersion": "0.4.0", "timelineTemplates": 3}"#);

    let err = tableau_app::open_project(&registry, "from-disk", Some(file.path()))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(!registry.contains("from-disk"));
}

#[tokio::test]
async fn test_short_id_rejected_in_full_mode() -> anyhow::Result<()> {
    let registry = tableau_app::build_registry(&Config::default())?;
    let result = tableau_app::open_project(&registry, "ab", None).await;
    assert!(result.is_err());
    Ok(())
}
