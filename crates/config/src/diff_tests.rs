// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_yaml::Value;

use super::*;

fn yaml(s: &str) -> Value {
    serde_yaml::from_str(s).unwrap()
}

#[test]
fn identical_trees_diff_to_nothing() {
    let default = yaml("a: 1\nb: two\n");
    let current = default.clone();
    assert_eq!(diff_against_default(&current, &default), None);
}

#[test]
fn changed_leaf_is_kept_alone() {
    let default = yaml("a: 1\nb: two\n");
    let current = yaml("a: 1\nb: three\n");
    let diffed = diff_against_default(&current, &default).unwrap();
    assert_eq!(diffed, yaml("b: three\n"));
}

#[test]
fn nested_change_does_not_drag_siblings() {
    let default = yaml("detectors:\n  d1:\n    parser: base\n    start_id: 0\n");
    let current = yaml("detectors:\n  d1:\n    parser: base\n    start_id: 42\n");
    let diffed = diff_against_default(&current, &default).unwrap();
    assert_eq!(diffed, yaml("detectors:\n  d1:\n    start_id: 42\n"));
}

#[test]
fn keys_absent_from_default_are_kept_in_full() {
    let default = yaml("detectors: {}\n");
    let current = yaml("detectors:\n  d1:\n    parser: base\n    start_id: 7\n");
    let diffed = diff_against_default(&current, &default).unwrap();
    assert_eq!(diffed, current);
}
