// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::PluginError;
use crate::registry::PluginRegistry;

/// Resolves a configured component name to the canonical dotted path of
/// a registered [`PluginDescriptor`].
///
/// Mirrors `ComponentResolver.resolve()`: a name containing a `.` is
/// assumed to already be a fully-qualified path and is looked up as-is;
/// a bare name is matched against every registered component's short
/// name, erroring if none or more than one registration matches.
pub struct PluginResolver<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> PluginResolver<'a> {
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(&self, name: &str) -> Result<&'static str, PluginError> {
        if name.contains('.') {
            return self
                .registry
                .get_by_dotted_path(name)
                .ok_or_else(|| PluginError::NotFound(name.to_string()));
        }

        let mut candidates = self.registry.get_by_short_name(name);
        match candidates.len() {
            0 => Err(PluginError::NotFound(name.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(PluginError::Ambiguous {
                name: name.to_string(),
                candidates: candidates.into_iter().map(str::to_string).collect(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
