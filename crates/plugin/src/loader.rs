// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use detectmate_config::ConfigSchema;
use detectmate_core::Processor;

use crate::error::PluginError;
use crate::registry::PluginRegistry;

/// Instantiates a resolved component, mirroring `ComponentLoader.load_component`:
/// construct with the supplied configuration, or with the schema default
/// when none was given.
pub struct PluginLoader<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> PluginLoader<'a> {
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    pub fn config_schema(&self, dotted_path: &str) -> Option<ConfigSchema> {
        self.registry.with_descriptor(dotted_path, |d| (d.config_schema)())
    }

    pub fn load(
        &self,
        dotted_path: &str,
        config: &serde_yaml::Value,
    ) -> Result<Box<dyn Processor>, PluginError> {
        self.registry
            .with_descriptor(dotted_path, |d| (d.build)(config))
            .unwrap_or_else(|| Err(PluginError::NotFound(dotted_path.to_string())))
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
