// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide settings, immutable after construction except for
//! `config_file`, which the launcher may rebind via `--config`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::endpoint::{EndpointError, EndpointUri};
use crate::identity::ComponentIdentity;

const ENV_PREFIX: &str = "DETECTMATE_";
const ENV_NESTED_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to parse settings yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error("invalid component_id {0:?}: {1}")]
    InvalidComponentId(String, uuid::Error),
}

/// Raw, partially-defaulted settings as they come off the wire (YAML file
/// merged with environment overrides). Every field optional-with-default
/// so a bare `{}` document, or none at all, is valid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawSettings {
    component_name: Option<String>,
    component_id: Option<String>,
    component_type: String,
    component_config_class: Option<String>,
    log_dir: PathBuf,
    log_level: String,
    log_to_console: bool,
    log_to_file: bool,
    engine_addr: String,
    out_addr: Vec<String>,
    http_host: String,
    http_port: u16,
    engine_autostart: bool,
    engine_recv_timeout_ms: u64,
    config_file: Option<PathBuf>,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            component_name: None,
            component_id: None,
            component_type: "core".to_string(),
            component_config_class: None,
            log_dir: PathBuf::from("./logs"),
            log_level: "INFO".to_string(),
            log_to_console: true,
            log_to_file: true,
            engine_addr: "ipc:///tmp/detectmate.engine.ipc".to_string(),
            out_addr: Vec::new(),
            http_host: "127.0.0.1".to_string(),
            http_port: 8000,
            engine_autostart: true,
            engine_recv_timeout_ms: 100,
            config_file: None,
        }
    }
}

/// Validated, process-wide settings. See spec §3 for field semantics.
#[derive(Debug, Clone)]
pub struct Settings {
    pub component_name: Option<String>,
    pub component_type: String,
    pub component_config_class: Option<String>,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub log_to_console: bool,
    pub log_to_file: bool,
    pub engine_addr: EndpointUri,
    pub out_addr: Vec<EndpointUri>,
    pub http_host: String,
    pub http_port: u16,
    pub engine_autostart: bool,
    pub engine_recv_timeout: Duration,
    pub config_file: Option<PathBuf>,
    pub identity: ComponentIdentity,
}

impl Settings {
    /// Load settings from an optional YAML file, then apply
    /// `DETECTMATE_`-prefixed environment overrides (`__` nests), matching
    /// spec §6. Environment always wins over the file.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, &std::env::vars().collect())
    }

    /// Same as [`Settings::load`] but takes an explicit environment map —
    /// used by tests so they don't depend on process-global state.
    pub fn load_with_env(
        path: Option<&Path>,
        env: &BTreeMap<String, String>,
    ) -> Result<Self, SettingsError> {
        let mut value: serde_yaml::Value = match path {
            Some(path) if path.exists() => {
                let text = std::fs::read_to_string(path)
                    .map_err(|source| SettingsError::Io { path: path.to_path_buf(), source })?;
                serde_yaml::from_str(&text)?
            }
            _ => serde_yaml::Value::Mapping(Default::default()),
        };

        apply_env_overrides(&mut value, env);

        let raw: RawSettings = serde_yaml::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSettings) -> Result<Self, SettingsError> {
        let engine_addr: EndpointUri = raw.engine_addr.parse()?;
        let out_addr = raw
            .out_addr
            .iter()
            .map(|s| s.parse::<EndpointUri>())
            .collect::<Result<Vec<_>, _>>()?;

        let explicit_id = match raw.component_id.as_deref() {
            Some(s) => Some(
                Uuid::parse_str(s)
                    .map_err(|e| SettingsError::InvalidComponentId(s.to_string(), e))?,
            ),
            None => None,
        };

        let identity = ComponentIdentity::derive(
            &raw.component_type,
            explicit_id,
            raw.component_name.as_deref(),
            &engine_addr,
            &out_addr,
        );

        Ok(Self {
            component_name: raw.component_name,
            component_type: raw.component_type,
            component_config_class: raw.component_config_class,
            log_dir: raw.log_dir,
            log_level: raw.log_level,
            log_to_console: raw.log_to_console,
            log_to_file: raw.log_to_file,
            engine_addr,
            out_addr,
            http_host: raw.http_host,
            http_port: raw.http_port,
            engine_autostart: raw.engine_autostart,
            engine_recv_timeout: Duration::from_millis(raw.engine_recv_timeout_ms),
            config_file: raw.config_file,
            identity,
        })
    }
}

/// Overlay `DETECTMATE_`-prefixed env vars onto a YAML mapping, nesting on
/// `__`. Mirrors the source's two-pass "collect overridden fields, then
/// build the final map" approach rather than a generic env-layering crate.
#[allow(clippy::expect_used)]
fn apply_env_overrides(value: &mut serde_yaml::Value, env: &BTreeMap<String, String>) {
    if !value.is_mapping() {
        *value = serde_yaml::Value::Mapping(Default::default());
    }
    let mapping = value.as_mapping_mut().expect("just ensured mapping");

    for (key, val) in env {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else { continue };
        let path: Vec<String> =
            rest.split(ENV_NESTED_SEPARATOR).map(|s| s.to_lowercase()).collect();
        set_nested(mapping, &path, val);
    }
}

#[allow(clippy::expect_used)]
fn set_nested(mapping: &mut serde_yaml::Mapping, path: &[String], raw_value: &str) {
    let scalar = parse_scalar(raw_value);
    match path {
        [] => {}
        [last] => {
            mapping.insert(serde_yaml::Value::String(last.clone()), scalar);
        }
        [head, tail @ ..] => {
            let key = serde_yaml::Value::String(head.clone());
            let entry = mapping
                .entry(key)
                .or_insert_with(|| serde_yaml::Value::Mapping(Default::default()));
            if !entry.is_mapping() {
                *entry = serde_yaml::Value::Mapping(Default::default());
            }
            let nested = entry.as_mapping_mut().expect("just ensured mapping");
            set_nested(nested, tail, raw_value);
        }
    }
}

/// Parse an environment string into a bool/int/float/string scalar so
/// typed fields (`bool`, `u16`, ...) deserialize correctly from env
/// overrides, not just from YAML-native values.
fn parse_scalar(raw: &str) -> serde_yaml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        return serde_yaml::Value::Bool(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return serde_yaml::Value::Number(i.into());
    }
    if let Ok(f) = raw.parse::<f64>() {
        return serde_yaml::Value::Number(f.into());
    }
    serde_yaml::Value::String(raw.to_string())
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
