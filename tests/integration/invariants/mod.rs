//! Registry invariant tests
//!
//! - A failed creation leaves no trace in the registry
//! - Deep validation depends only on document shape

use serde_json::{json, Value};
use tableau_projects::{OnDiskState, ProjectConfig, StateSchema};

use crate::common::{animated_state, with_state, TestRegistry};

mod no_mutation_on_failure {
    use super::*;

    #[test]
    fn test_failed_attempts_leave_registry_untouched_in_full_mode() {
        let t = TestRegistry::full();
        let failures: Vec<(Value, ProjectConfig)> = vec![
            (json!(" padded "), ProjectConfig::default()),
            (json!("ab"), ProjectConfig::default()),
            (json!("broken-state"), with_state(json!({ "revision": "" }))),
        ];

        for (id, config) in failures {
            assert!(t.registry.create_project(id.clone(), config).is_err());
            if let Some(id) = id.as_str() {
                assert!(!t.registry.contains(id));
            }
        }
        assert!(t.registry.is_empty());

        // Retrying the broken one with corrected input succeeds
        assert!(t
            .registry
            .create_project("broken-state", with_state(animated_state()))
            .is_ok());
        assert_eq!(t.registry.ids(), vec!["broken-state".to_string()]);
    }

    #[test]
    fn test_failed_attempts_leave_registry_untouched_in_embedded_mode() {
        let t = TestRegistry::embedded();
        assert!(t
            .registry
            .create_project("abc", ProjectConfig::default())
            .is_err());
        assert!(t
            .registry
            .create_project("abc", with_state(json!([])))
            .is_err());
        assert!(!t.registry.contains("abc"));

        assert!(t
            .registry
            .create_project("abc", with_state(animated_state()))
            .is_ok());
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn test_validation_survives_serialisation_round_trip() {
        let schema = StateSchema::compile(
            animated_state()["definitionVersion"]
                .as_str()
                .unwrap(),
        )
        .unwrap();

        let original = OnDiskState::from(animated_state());
        assert!(schema.violations(original.as_value()).is_empty());

        let text = serde_json::to_string_pretty(&original).unwrap();
        let restored: OnDiskState = serde_json::from_str(&text).unwrap();

        assert_eq!(restored, original);
        assert!(schema.violations(restored.as_value()).is_empty());
    }

    #[test]
    fn test_round_tripped_state_registers_in_fresh_registry() {
        let first = TestRegistry::full();
        let project = first
            .registry
            .create_project("exported", with_state(animated_state()))
            .unwrap();

        let exported = serde_json::to_vec(&project.state().unwrap().unwrap()).unwrap();
        let imported: OnDiskState = serde_json::from_slice(&exported).unwrap();

        let second = TestRegistry::full();
        assert!(second
            .registry
            .create_project("exported", ProjectConfig::with_state(imported))
            .is_ok());
        assert!(second.sink.reports().is_empty());
    }
}
