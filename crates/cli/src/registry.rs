// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use detectmate_plugin::PluginRegistry;

/// Builds the registry of processors this binary can host.
///
/// Empty by default: this runtime ships no detector/parser/reader
/// implementations of its own. A deployment that bundles such
/// components registers them here, at the one place a binary's
/// `main()` wires the composition root together.
pub fn builtin_registry() -> PluginRegistry {
    PluginRegistry::new()
}
