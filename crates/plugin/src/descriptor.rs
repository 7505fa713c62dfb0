// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use detectmate_config::ConfigSchema;
use detectmate_core::Processor;

use crate::error::PluginError;

/// Describes one compiled-in processor the resolver/loader can hand out.
///
/// `dotted_path` is what `CoreComponent`-derived classes registered under
/// their fully-qualified module path in the source system; `short_name`
/// is the bare class name the original resolved via a package walk. Here
/// both are known at compile time, so resolution is a map lookup instead
/// of an import-and-introspect scan.
pub struct PluginDescriptor {
    pub dotted_path: &'static str,
    pub short_name: &'static str,
    pub component_type: &'static str,
    pub config_schema: fn() -> ConfigSchema,
    pub build: fn(&serde_yaml::Value) -> Result<Box<dyn Processor>, PluginError>,
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("dotted_path", &self.dotted_path)
            .field("short_name", &self.short_name)
            .field("component_type", &self.component_type)
            .finish()
    }
}
