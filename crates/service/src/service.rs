// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use detectmate_admin::AdminState;
use detectmate_config::ConfigStore;
use detectmate_core::{PassThroughProcessor, Processor, Settings};
use detectmate_engine::{Engine, EngineHandle, EngineMetrics, OutputRegistry};
use detectmate_plugin::{PluginLoader, PluginRegistry, PluginResolver};
use detectmate_transport::{DefaultSocketFactory, SocketFactory};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::ServiceError;

/// Sentinel `component_type` meaning "host no specific processor": the
/// engine runs with a pass-through identity processor. This is the Rust
/// stand-in for the source system's abstract `CoreComponent` base, which
/// is never meant to be instantiated directly.
const NO_PROCESSOR_SENTINEL: &str = "core";

const DEFAULT_CONFIG_FILE: &str = "./config.yaml";

/// How long [`Service::run`] waits for the engine loop to drain in-flight
/// work after a shutdown is requested, mirroring the source `Engine.stop()`'s
/// `join(timeout=1.0)`.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Composition root: wires settings, the resolved processor, its config
/// store, the engine loop, and the admin HTTP surface into one runnable
/// process.
pub struct Service {
    settings: Settings,
    engine: Option<Engine>,
    handle: EngineHandle,
    config: Arc<ConfigStore>,
    exit: CancellationToken,
}

impl Service {
    /// Builds every collaborator described in settings: resolves and
    /// loads the configured processor (or falls back to pass-through),
    /// loads its configuration store, and binds/dials the transport
    /// sockets settings names.
    pub async fn build(settings: Settings, registry: &PluginRegistry) -> Result<Self, ServiceError> {
        let resolver = PluginResolver::new(registry);
        let loader = PluginLoader::new(registry);

        let dotted_path = if settings.component_type == NO_PROCESSOR_SENTINEL {
            None
        } else {
            Some(resolver.resolve(&settings.component_type)?)
        };

        let config_schema = dotted_path.and_then(|d| loader.config_schema(d));
        let config_path: PathBuf = settings.config_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let config = Arc::new(ConfigStore::load(config_path, config_schema)?);

        let processor: Box<dyn Processor> = match dotted_path {
            Some(dotted) => loader.load(dotted, &config.get())?,
            None => Box::new(PassThroughProcessor),
        };

        let factory = DefaultSocketFactory;
        let input = factory.bind(&settings.engine_addr, settings.engine_recv_timeout).await?;
        let mut output_sockets = Vec::with_capacity(settings.out_addr.len());
        for uri in &settings.out_addr {
            let socket = factory.dial(uri).await?;
            output_sockets.push((uri.clone(), socket));
        }
        let outputs = OutputRegistry::new(output_sockets);

        let metrics = Arc::new(EngineMetrics::new(&settings.identity)?);
        let (engine, handle) =
            Engine::new(settings.identity.clone(), input, outputs, processor, metrics, settings.engine_autostart);

        Ok(Self { settings, engine: Some(engine), handle, config, exit: CancellationToken::new() })
    }

    pub fn engine_handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    /// Requests the same shutdown `/admin/shutdown` triggers, usable by
    /// any caller holding a reference before `run()` consumes `self`.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.exit.clone()
    }

    /// Runs until `/admin/shutdown` is called or the process receives
    /// ctrl-c, then tears everything down.
    #[allow(clippy::expect_used)]
    pub async fn run(mut self) -> Result<(), ServiceError> {
        let engine = self.engine.take().expect("build() always sets the engine");
        let engine_task = tokio::spawn(engine.run());

        let admin_state = AdminState {
            engine: self.handle.clone(),
            config: Some(self.config.clone()),
            settings: Arc::new(self.settings.clone()),
            exit: self.exit.clone(),
        };
        let admin_host = self.settings.http_host.clone();
        let admin_port = self.settings.http_port;
        let admin_task = tokio::spawn(async move {
            detectmate_admin::serve(&admin_host, admin_port, admin_state).await
        });

        info!(component = %self.settings.identity, "service running");

        tokio::select! {
            _ = self.exit.cancelled() => info!("shutdown requested"),
            _ = tokio::signal::ctrl_c() => {
                info!("ctrl-c received, shutting down");
                self.exit.cancel();
            }
        }

        self.handle.shutdown();
        if tokio::time::timeout(SHUTDOWN_GRACE, engine_task).await.is_err() {
            warn!("engine loop did not exit within the shutdown grace period");
        }

        match tokio::time::timeout(SHUTDOWN_GRACE, admin_task).await {
            Ok(Ok(Ok(()))) => {}
            Ok(Ok(Err(err))) => return Err(ServiceError::Admin(err)),
            Ok(Err(_join_err)) => warn!("admin task panicked during shutdown"),
            Err(_elapsed) => warn!("admin api did not exit within the shutdown grace period"),
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
