//! Structural schema of on-disk project state
//!
//! Compiled once per registry for the definition version it accepts. Deep
//! validation collects every violation instead of stopping at the first.

use serde_json::{json, Value};

use crate::error::{ProjectError, Result};

/// Number of control values in a cubic bezier handle array
const BEZIER_HANDLE_COUNT: usize = 4;

/// One structural problem found in a state document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer of the offending value, `$` for the root
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    /// Human-readable diagnostic line
    pub fn render(&self) -> String {
        format!("{}: {}", self.path, self.message)
    }
}

/// JSON Schema document describing on-disk state of `definition_version`
pub fn on_disk_state_schema(definition_version: &str) -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["definitionVersion", "revision", "timelineTemplates"],
        "properties": {
            "definitionVersion": { "const": definition_version },
            "revision": { "type": "string", "minLength": 1 },
            "timelineTemplates": {
                "type": "object",
                "additionalProperties": { "$ref": "#/$defs/timelineTemplate" }
            }
        },
        "additionalProperties": false,
        "$defs": {
            "timelineTemplate": {
                "type": "object",
                "required": ["objectTemplates"],
                "properties": {
                    "objectTemplates": {
                        "type": "object",
                        "additionalProperties": { "$ref": "#/$defs/objectTemplate" }
                    }
                },
                "additionalProperties": false
            },
            "objectTemplate": {
                "type": "object",
                "required": ["props"],
                "properties": {
                    "props": {
                        "type": "object",
                        "additionalProperties": { "$ref": "#/$defs/prop" }
                    }
                },
                "additionalProperties": false
            },
            "prop": {
                "type": "object",
                "required": ["valueContainer"],
                "properties": {
                    "valueContainer": {
                        "oneOf": [
                            { "$ref": "#/$defs/staticValue" },
                            { "$ref": "#/$defs/bezierCurves" }
                        ]
                    }
                },
                "additionalProperties": false
            },
            "staticValue": {
                "type": "object",
                "required": ["type", "value"],
                "properties": {
                    "type": { "const": "StaticValueContainer" },
                    "value": { "type": "number" }
                },
                "additionalProperties": false
            },
            "bezierCurves": {
                "type": "object",
                "required": ["type", "points"],
                "properties": {
                    "type": { "const": "BezierCurvesOfScalarValues" },
                    "points": {
                        "type": "array",
                        "items": { "$ref": "#/$defs/point" }
                    }
                },
                "additionalProperties": false
            },
            "point": {
                "type": "object",
                "required": ["time", "value", "interpolationDescriptor"],
                "properties": {
                    "time": { "type": "number", "minimum": 0 },
                    "value": { "type": "number" },
                    "interpolationDescriptor": { "$ref": "#/$defs/interpolation" }
                },
                "additionalProperties": false
            },
            "interpolation": {
                "type": "object",
                "required": ["connected", "interpolationType", "handles"],
                "properties": {
                    "__descriptorType": { "const": "TimelinePointInterpolationDescriptor" },
                    "connected": { "type": "boolean" },
                    "interpolationType": { "const": "CubicBezier" },
                    "handles": {
                        "type": "array",
                        "items": { "type": "number" },
                        "minItems": BEZIER_HANDLE_COUNT,
                        "maxItems": BEZIER_HANDLE_COUNT
                    }
                },
                "additionalProperties": false
            }
        }
    })
}

/// Compiled validator for one definition version
pub struct StateSchema {
    definition_version: String,
    validator: jsonschema::Validator,
}

impl StateSchema {
    /// Compile the schema for `definition_version`
    pub fn compile(definition_version: &str) -> Result<Self> {
        let validator = jsonschema::options()
            .build(&on_disk_state_schema(definition_version))
            .map_err(|e| ProjectError::Internal(format!("Invalid state schema: {}", e)))?;

        Ok(Self {
            definition_version: definition_version.to_string(),
            validator,
        })
    }

    pub fn definition_version(&self) -> &str {
        &self.definition_version
    }

    /// Every structural violation in `value`, empty when it conforms
    pub fn violations(&self, value: &Value) -> Vec<SchemaViolation> {
        self.validator
            .iter_errors(value)
            .map(|error| {
                let pointer = error.instance_path().to_string();
                SchemaViolation {
                    path: if pointer.is_empty() {
                        "$".to_string()
                    } else {
                        format!("${}", pointer)
                    },
                    message: error.to_string(),
                }
            })
            .collect()
    }

    pub fn is_valid(&self, value: &Value) -> bool {
        self.validator.is_valid(value)
    }
}

impl std::fmt::Debug for StateSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateSchema")
            .field("definition_version", &self.definition_version)
            .finish_non_exhaustive()
    }
}
