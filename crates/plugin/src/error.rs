// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("no registered component matches {0:?}")]
    NotFound(String),

    #[error("{name:?} matches more than one registered component: {}", .candidates.join(", "))]
    Ambiguous { name: String, candidates: Vec<String> },

    #[error("failed to build component {name:?}: {message}")]
    Build { name: String, message: String },
}
