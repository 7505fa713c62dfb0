// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_yaml::{Mapping, Value};

/// Keeps only the keys of `current` that differ from `default`, recursing
/// into nested mappings so a deeply-nested override doesn't drag its
/// untouched siblings along with it.
///
/// This is the Rust realization of `ConfigManager.save()` preferring a
/// hand-written `to_dict()` over a full model dump: a full dump of a
/// validated tree re-introduces every schema default the caller never
/// asked for, and those defaults get written back to disk as if they had
/// been explicitly chosen.
pub fn diff_against_default(current: &Value, default: &Value) -> Option<Value> {
    match (current, default) {
        (Value::Mapping(cur_map), Value::Mapping(def_map)) => {
            let mut result = Mapping::new();
            for (key, cur_val) in cur_map {
                match def_map.get(key) {
                    Some(def_val) => {
                        if let Some(diffed) = diff_against_default(cur_val, def_val) {
                            result.insert(key.clone(), diffed);
                        }
                    }
                    None => {
                        result.insert(key.clone(), cur_val.clone());
                    }
                }
            }
            if result.is_empty() {
                None
            } else {
                Some(Value::Mapping(result))
            }
        }
        _ => {
            if current == default {
                None
            } else {
                Some(current.clone())
            }
        }
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
