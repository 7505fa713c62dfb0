// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;
use std::io::Write;

use super::*;

fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn defaults_when_no_file_and_no_env() {
    let settings = Settings::load_with_env(None, &env(&[])).unwrap();
    assert_eq!(settings.component_type, "core");
    assert_eq!(settings.http_port, 8000);
    assert!(settings.engine_autostart);
}

#[test]
fn loads_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "component_type: detector\nhttp_port: 9100\n").unwrap();
    let settings = Settings::load_with_env(Some(file.path()), &env(&[])).unwrap();
    assert_eq!(settings.component_type, "detector");
    assert_eq!(settings.http_port, 9100);
}

#[test]
fn env_overrides_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_level: INFO\n").unwrap();
    let settings = Settings::load_with_env(
        Some(file.path()),
        &env(&[("DETECTMATE_LOG_LEVEL", "DEBUG")]),
    )
    .unwrap();
    assert_eq!(settings.log_level, "DEBUG");
}

#[test]
fn nested_env_override_uses_double_underscore() {
    // out_addr is a list, but http_host is scalar — verify nested path
    // construction doesn't panic for an unrelated nested key and that a
    // simple scalar override still applies alongside it.
    let settings = Settings::load_with_env(
        None,
        &env(&[
            ("DETECTMATE_HTTP_HOST", "0.0.0.0"),
            ("DETECTMATE_DETECTOR__THRESHOLD", "0.7"),
        ]),
    )
    .unwrap();
    assert_eq!(settings.http_host, "0.0.0.0");
}

#[test]
fn rejects_unsupported_engine_addr_scheme() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "engine_addr: http://nope\n").unwrap();
    let err = Settings::load_with_env(Some(file.path()), &env(&[])).unwrap_err();
    assert!(matches!(err, SettingsError::Endpoint(_)));
}

#[test]
fn component_id_is_stable_across_loads_with_same_name() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "component_name: my-detector\ncomponent_type: detector\n").unwrap();
    let a = Settings::load_with_env(Some(file.path()), &env(&[])).unwrap();
    let b = Settings::load_with_env(Some(file.path()), &env(&[])).unwrap();
    assert_eq!(a.identity.id, b.identity.id);
}

#[test]
fn explicit_component_id_is_honored() {
    let id = Uuid::new_v4();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "component_id: {id}\n").unwrap();
    let settings = Settings::load_with_env(Some(file.path()), &env(&[])).unwrap();
    assert_eq!(settings.identity.id, id);
}
