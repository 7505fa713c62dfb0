// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A compiled configuration schema paired with the schema-default value,
/// used both to validate reconfigure payloads and to compute the
/// minimal-form diff persisted to disk.
pub struct ConfigSchema {
    pub(crate) json_schema: serde_json::Value,
    pub(crate) validator: jsonschema::Validator,
    pub default: serde_yaml::Value,
}

impl std::fmt::Debug for ConfigSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigSchema").field("default", &self.default).finish()
    }
}

/// Derives a [`ConfigSchema`] from a processor's config type. The type
/// supplies both the JSON Schema (via `schemars`) and the default tree
/// (via its `Default` impl), mirroring the role `CoreConfig` subclasses
/// play as the pydantic schema root in the source system.
#[allow(clippy::expect_used)]
pub fn schema_for<T>() -> ConfigSchema
where
    T: JsonSchema + Serialize + DeserializeOwned + Default,
{
    let root = schemars::schema_for!(T);
    let json_schema =
        serde_json::to_value(&root).expect("schemars root schema always serializes");
    let validator = jsonschema::validator_for(&json_schema)
        .expect("schemars-derived schema is always a valid json schema");
    let default = serde_yaml::to_value(T::default()).expect("default value always serializes");
    ConfigSchema { json_schema, validator, default }
}

impl ConfigSchema {
    pub fn json_schema(&self) -> &serde_json::Value {
        &self.json_schema
    }

    /// Validates a yaml tree against this schema, returning every
    /// violation found rather than just the first.
    pub fn validate(&self, value: &serde_yaml::Value) -> Result<(), Vec<String>> {
        let as_json = yaml_to_json(value);
        let errors: Vec<String> =
            self.validator.iter_errors(&as_json).map(|e| e.to_string()).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Bridges between `serde_yaml::Value` and `serde_json::Value` via the
/// shared `serde` data model; both are plain trees so this never fails
/// for data that originated as yaml or json.
pub fn yaml_to_json(value: &serde_yaml::Value) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
