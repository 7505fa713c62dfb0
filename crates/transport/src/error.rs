// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("address already in use: {0}")]
    AddressInUse(String),

    #[error("failed to remove stale ipc path {path}: {source}")]
    StaleIpcCleanup { path: String, #[source] source: std::io::Error },

    #[error("failed to bind endpoint {uri}: {source}")]
    Bind { uri: String, #[source] source: std::io::Error },

    #[error("failed to dial endpoint {uri}: {source}")]
    Dial { uri: String, #[source] source: std::io::Error },

    #[error("receive timed out")]
    Timeout,

    #[error("socket closed")]
    Closed,

    #[error("no peer connected")]
    NoPeer,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
