// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::echo_descriptor;

#[test]
fn registers_and_finds_by_dotted_path() {
    let registry = PluginRegistry::new();
    registry.register(echo_descriptor("demo.Echo", "Echo"));
    assert_eq!(registry.get_by_dotted_path("demo.Echo"), Some("demo.Echo"));
    assert_eq!(registry.get_by_dotted_path("demo.Missing"), None);
}

#[test]
fn finds_by_short_name() {
    let registry = PluginRegistry::new();
    registry.register(echo_descriptor("demo.Echo", "Echo"));
    assert_eq!(registry.get_by_short_name("Echo"), vec!["demo.Echo"]);
    assert!(registry.get_by_short_name("NoSuchThing").is_empty());
}

#[test]
fn same_short_name_can_register_from_multiple_paths() {
    let registry = PluginRegistry::new();
    registry.register(echo_descriptor("demo.a.Echo", "Echo"));
    registry.register(echo_descriptor("demo.b.Echo", "Echo"));
    let mut matches = registry.get_by_short_name("Echo");
    matches.sort_unstable();
    assert_eq!(matches, vec!["demo.a.Echo", "demo.b.Echo"]);
}
