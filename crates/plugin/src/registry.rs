// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::descriptor::PluginDescriptor;

/// Compiled-in replacement for the source system's `pkgutil.walk_packages`
/// discovery: every component a binary can host registers itself here
/// once, at startup, instead of being found by import side effects.
#[derive(Default)]
pub struct PluginRegistry {
    by_dotted: RwLock<HashMap<&'static str, PluginDescriptor>>,
    by_short: RwLock<HashMap<&'static str, Vec<&'static str>>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, descriptor: PluginDescriptor) {
        debug!(dotted_path = descriptor.dotted_path, short_name = descriptor.short_name, "registering component");
        self.by_short.write().entry(descriptor.short_name).or_default().push(descriptor.dotted_path);
        self.by_dotted.write().insert(descriptor.dotted_path, descriptor);
    }

    pub fn get_by_dotted_path(&self, dotted_path: &str) -> Option<&'static str> {
        self.by_dotted.read().get(dotted_path).map(|d| d.dotted_path)
    }

    pub fn get_by_short_name(&self, short_name: &str) -> Vec<&'static str> {
        self.by_short.read().get(short_name).cloned().unwrap_or_default()
    }

    pub fn with_descriptor<R>(&self, dotted_path: &str, f: impl FnOnce(&PluginDescriptor) -> R) -> Option<R> {
        self.by_dotted.read().get(dotted_path).map(f)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
