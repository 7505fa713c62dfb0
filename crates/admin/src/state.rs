// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use detectmate_config::ConfigStore;
use detectmate_core::Settings;
use detectmate_engine::EngineHandle;
use tokio_util::sync::CancellationToken;

/// Shared state handed to every admin route. Cheap to clone: everything
/// behind it is already reference-counted or lock-guarded.
#[derive(Clone)]
pub struct AdminState {
    pub engine: EngineHandle,
    /// `None` when no config manager is configured for this component;
    /// `/admin/reconfigure` and the `configs` field of `/admin/status`
    /// degrade gracefully rather than erroring.
    pub config: Option<Arc<ConfigStore>>,
    pub settings: Arc<Settings>,
    /// Cancelled when `/admin/shutdown` is called; the composition root
    /// waits on this to know when to tear the whole process down.
    pub exit: CancellationToken,
}
