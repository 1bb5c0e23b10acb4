//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - Registries for both distributions with a recording diagnostic sink
//! - Well-formed and broken on-disk state documents

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use tableau_common::config::DEFAULT_DEFINITION_VERSION;
use tableau_projects::{
    OnDiskState, ProjectConfig, ProjectRegistry, RecordingDiagnosticSink, RegistryOptions,
};

/// Registry plus the sink its deep-validation reports go to
pub struct TestRegistry {
    pub registry: ProjectRegistry,
    pub sink: RecordingDiagnosticSink,
}

impl TestRegistry {
    pub fn full() -> Self {
        Self::with_options(RegistryOptions::full())
    }

    pub fn embedded() -> Self {
        Self::with_options(RegistryOptions::embedded())
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        let sink = RecordingDiagnosticSink::new();
        let registry = ProjectRegistry::with_sink(options, Arc::new(sink.clone()))
            .expect("state schema should compile");
        Self { registry, sink }
    }
}

/// A state with one animated prop and one static prop
pub fn animated_state() -> Value {
    json!({
        "definitionVersion": DEFAULT_DEFINITION_VERSION,
        "revision": "c0ffee",
        "timelineTemplates": {
            "Scene / Intro": {
                "objectTemplates": {
                    "Title": {
                        "props": {
                            "opacity": {
                                "valueContainer": {
                                    "type": "StaticValueContainer",
                                    "value": 0.5
                                }
                            },
                            "y": {
                                "valueContainer": {
                                    "type": "BezierCurvesOfScalarValues",
                                    "points": [
                                        {
                                            "time": 0,
                                            "value": 0,
                                            "interpolationDescriptor": {
                                                "__descriptorType": "TimelinePointInterpolationDescriptor",
                                                "connected": true,
                                                "interpolationType": "CubicBezier",
                                                "handles": [0.5, 0.0, 0.5, 1.0]
                                            }
                                        },
                                        {
                                            "time": 1200,
                                            "value": 40,
                                            "interpolationDescriptor": {
                                                "connected": false,
                                                "interpolationType": "CubicBezier",
                                                "handles": [0.5, 0.0, 0.5, 1.0]
                                            }
                                        }
                                    ]
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

pub fn with_state(state: Value) -> ProjectConfig {
    ProjectConfig::with_state(OnDiskState::from(state))
}
