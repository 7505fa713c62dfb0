// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Transport(#[from] detectmate_transport::TransportError),

    #[error(transparent)]
    Plugin(#[from] detectmate_plugin::PluginError),

    #[error(transparent)]
    Config(#[from] detectmate_config::ConfigError),

    #[error(transparent)]
    Engine(#[from] detectmate_engine::EngineError),

    #[error("admin api failed: {0}")]
    Admin(#[source] std::io::Error),
}
