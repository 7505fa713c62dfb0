// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

use crate::diff::diff_against_default;
use crate::error::ConfigError;
use crate::schema::ConfigSchema;

/// Hot-reloadable configuration tree for a hosted processor.
///
/// Holds the current validated tree behind a single-writer lock and,
/// when a schema was supplied, persists only the keys that differ from
/// the schema default so a saved file never grows defaults the caller
/// never asked for.
pub struct ConfigStore {
    path: PathBuf,
    schema: Option<ConfigSchema>,
    current: RwLock<Value>,
}

impl ConfigStore {
    /// Loads `path`, synthesizing and persisting a schema default if the
    /// file does not yet exist.
    pub fn load(path: impl Into<PathBuf>, schema: Option<ConfigSchema>) -> Result<Self, ConfigError> {
        let path = path.into();
        let current = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
            let tree: Value = serde_yaml::from_str(&raw)?;
            if let Some(schema) = &schema {
                schema.validate(&tree).map_err(ConfigError::Validation)?;
            }
            debug!(path = %path.display(), "loaded configuration");
            tree
        } else if let Some(schema) = &schema {
            info!(path = %path.display(), "no configuration file found, writing schema default");
            let default = schema.default.clone();
            write_minimal(&path, &default, schema)?;
            default
        } else {
            Value::Mapping(Mapping::new())
        };

        Ok(Self { path, schema, current: RwLock::new(current) })
    }

    /// Returns a clone of the currently active configuration tree.
    pub fn get(&self) -> Value {
        self.current.read().clone()
    }

    pub fn schema(&self) -> Option<&ConfigSchema> {
        self.schema.as_ref()
    }

    /// Validates and installs `tree` as the active configuration, then
    /// persists it in minimal form when `persist` is set. An empty
    /// mapping is treated as a no-op: the caller sent nothing to change.
    pub fn update(&self, tree: Value, persist: bool) -> Result<bool, ConfigError> {
        if is_empty_mapping(&tree) {
            return Ok(false);
        }
        if let Some(schema) = &self.schema {
            schema.validate(&tree).map_err(ConfigError::Validation)?;
        }
        *self.current.write() = tree.clone();
        if persist {
            self.save(Some(tree))?;
        }
        Ok(true)
    }

    /// Writes `tree` (or the current tree, if `None`) to disk in minimal
    /// form relative to the schema default.
    pub fn save(&self, tree: Option<Value>) -> Result<(), ConfigError> {
        let tree = tree.unwrap_or_else(|| self.current.read().clone());
        match &self.schema {
            Some(schema) => write_minimal(&self.path, &tree, schema),
            None => write_raw(&self.path, &tree),
        }
    }
}

fn is_empty_mapping(value: &Value) -> bool {
    matches!(value, Value::Mapping(map) if map.is_empty())
}

fn write_minimal(path: &Path, tree: &Value, schema: &ConfigSchema) -> Result<(), ConfigError> {
    let minimal = diff_against_default(tree, &schema.default).unwrap_or(Value::Mapping(Mapping::new()));
    write_raw(path, &minimal)
}

fn write_raw(path: &Path, tree: &Value) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|source| ConfigError::CreateDir { path: parent.display().to_string(), source })?;
        }
    }
    let rendered = serde_yaml::to_string(tree)?;
    std::fs::write(path, rendered)
        .map_err(|source| ConfigError::Write { path: path.display().to_string(), source })
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
