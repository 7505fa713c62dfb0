// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: String, #[source] source: std::io::Error },

    #[error("failed to write config file {path}: {source}")]
    Write { path: String, #[source] source: std::io::Error },

    #[error("failed to create parent directory {path}: {source}")]
    CreateDir { path: String, #[source] source: std::io::Error },

    #[error("malformed yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config does not match schema: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("no configuration has been loaded yet")]
    NotLoaded,
}
