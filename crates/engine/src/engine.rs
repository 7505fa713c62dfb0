// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use detectmate_core::{ComponentIdentity, Processor};
use detectmate_transport::{MessageSocket, TransportError};
use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::metrics::EngineMetrics;
use crate::output::OutputRegistry;
use crate::state::EngineState;

/// How often the loop re-checks its state while idle, paused, or stopped.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A cloneable, shared-state handle onto a running [`Engine`]. This is
/// what the admin surface and the composition root hold: it never
/// touches the socket or the processor directly, only the state flag and
/// the cancellation token the loop itself polls.
#[derive(Clone)]
pub struct EngineHandle {
    identity: ComponentIdentity,
    state: Arc<RwLock<EngineState>>,
    metrics: Arc<EngineMetrics>,
    shutdown: CancellationToken,
}

impl EngineHandle {
    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    pub fn state(&self) -> EngineState {
        *self.state.read()
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Idempotent: starting an already-running engine is a no-op.
    pub fn start(&self) {
        let mut state = self.state.write();
        if matches!(*state, EngineState::Running) {
            return;
        }
        *state = EngineState::Running;
        self.metrics.running.set(1);
        self.metrics.starts_total.inc();
        info!(component = %self.identity, "engine started");
    }

    /// Idempotent: stopping an already-stopped engine is a no-op.
    pub fn stop(&self) {
        let mut state = self.state.write();
        if matches!(*state, EngineState::Stopped) {
            return;
        }
        *state = EngineState::Stopped;
        self.metrics.running.set(0);
        info!(component = %self.identity, "engine stopped");
    }

    pub fn pause(&self) {
        let mut state = self.state.write();
        if matches!(*state, EngineState::Running) {
            *state = EngineState::Paused;
            self.metrics.running.set(0);
            debug!(component = %self.identity, "engine paused");
        }
    }

    pub fn resume(&self) {
        let mut state = self.state.write();
        if matches!(*state, EngineState::Paused) {
            *state = EngineState::Running;
            self.metrics.running.set(1);
            debug!(component = %self.identity, "engine resumed");
        }
    }

    /// Tears down the run loop's task entirely. Unlike [`stop`](Self::stop)
    /// this cannot be reversed by [`start`](Self::start).
    pub fn shutdown(&self) {
        self.stop();
        self.shutdown.cancel();
    }
}

/// Hosts one [`Processor`], driving it from a single input socket and
/// fanning its output out to zero or more peers.
///
/// The Rust realization of the source system's `Engine` thread: instead
/// of a dedicated OS thread polling a `threading.Event`, this runs as a
/// tokio task polling a shared [`EngineState`], which a cloned
/// [`EngineHandle`] on another task can flip.
pub struct Engine {
    identity: ComponentIdentity,
    input: Box<dyn MessageSocket>,
    outputs: OutputRegistry,
    processor: Box<dyn Processor>,
    state: Arc<RwLock<EngineState>>,
    metrics: Arc<EngineMetrics>,
    shutdown: CancellationToken,
    autostart: bool,
}

impl Engine {
    pub fn new(
        identity: ComponentIdentity,
        input: Box<dyn MessageSocket>,
        outputs: OutputRegistry,
        processor: Box<dyn Processor>,
        metrics: Arc<EngineMetrics>,
        autostart: bool,
    ) -> (Self, EngineHandle) {
        let state = Arc::new(RwLock::new(EngineState::Idle));
        let shutdown = CancellationToken::new();
        let handle = EngineHandle {
            identity: identity.clone(),
            state: state.clone(),
            metrics: metrics.clone(),
            shutdown: shutdown.clone(),
        };
        let engine = Self { identity, input, outputs, processor, state, metrics, shutdown, autostart };
        (engine, handle)
    }

    /// Replaces the hosted processor, e.g. after a reconfigure. Callers
    /// are expected to pause the engine first so the swap cannot race an
    /// in-flight `process()` call.
    pub fn replace_processor(&mut self, processor: Box<dyn Processor>) {
        self.processor = processor;
    }

    pub fn output_slots(&self) -> Vec<(detectmate_core::EndpointUri, bool)> {
        self.outputs.slot_uris()
    }

    /// Runs until shut down. Consumes `self` because nothing outside this
    /// task ever needs to touch the socket or processor again; control
    /// flows exclusively through the cloned [`EngineHandle`].
    pub async fn run(mut self) {
        if self.autostart {
            *self.state.write() = EngineState::Running;
            self.metrics.running.set(1);
            self.metrics.starts_total.inc();
            info!(component = %self.identity, "engine autostarted");
        }

        loop {
            if self.shutdown.is_cancelled() {
                break;
            }

            if *self.state.read() != EngineState::Running {
                tokio::select! {
                    _ = self.shutdown.cancelled() => break,
                    _ = tokio::time::sleep(IDLE_POLL_INTERVAL) => continue,
                }
            }

            let recv_result = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                result = self.input.recv() => result,
            };

            match recv_result {
                Ok(message) => self.process_message(&message).await,
                Err(TransportError::Timeout) => continue,
                Err(TransportError::Closed) => {
                    warn!(component = %self.identity, "input socket closed, stopping engine");
                    *self.state.write() = EngineState::Stopped;
                    self.metrics.running.set(0);
                }
                Err(err) => {
                    error!(component = %self.identity, error = %err, "input socket error");
                }
            }
        }

        info!(component = %self.identity, "engine loop exited");
    }

    async fn process_message(&mut self, message: &[u8]) {
        let timer = self.metrics.processing_duration_seconds.start_timer();
        let result = self.processor.process(message);
        timer.observe_duration();
        self.metrics.processed_bytes_total.inc_by(message.len() as u64);

        match result {
            Ok(Some(output)) if !output.is_empty() => {
                let report = self.outputs.broadcast(&output).await;
                if report.newly_broken > 0 {
                    self.metrics.broadcast_failures_total.inc_by(report.newly_broken as u64);
                }
            }
            Ok(_) => debug!(component = %self.identity, "processor produced no output"),
            Err(err) => error!(component = %self.identity, error = %err, "processor error"),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
