// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use detectmate_core::ComponentIdentity;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntGauge, Opts, Registry};

/// `processing_duration_seconds` bucket boundaries, with the 1ms boundary
/// prometheus' own defaults omit.
const DURATION_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Per-engine metrics, registered into a private [`Registry`] rather than
/// the process-wide default one: tests and any future multi-engine host
/// construct several `Engine`s in one process, and a shared default
/// registry would reject the second registration of the same metric name.
/// Every collector carries `{component_type, component_id}` const labels
/// so metrics scraped across several hosted engines stay attributable.
pub struct EngineMetrics {
    pub registry: Registry,
    pub running: IntGauge,
    pub starts_total: IntCounter,
    pub processed_bytes_total: IntCounter,
    pub processing_duration_seconds: Histogram,
    pub broadcast_failures_total: IntCounter,
}

impl EngineMetrics {
    pub fn new(identity: &ComponentIdentity) -> prometheus::Result<Self> {
        let registry = Registry::new();
        let component_type = identity.component_type.clone();
        let component_id = identity.id.to_string();

        let opts = |name: &'static str, help: &'static str| {
            Opts::new(name, help)
                .const_label("component_type", component_type.clone())
                .const_label("component_id", component_id.clone())
        };

        let running = IntGauge::with_opts(opts("engine_running", "1 while the engine loop is processing messages"))?;
        registry.register(Box::new(running.clone()))?;

        let starts_total = IntCounter::with_opts(opts("engine_starts_total", "number of times the engine has been started"))?;
        registry.register(Box::new(starts_total.clone()))?;

        let processed_bytes_total = IntCounter::with_opts(opts(
            "data_processed_bytes_total",
            "total bytes of input messages handed to the processor",
        ))?;
        registry.register(Box::new(processed_bytes_total.clone()))?;

        let processing_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("processing_duration_seconds", "time spent in a single processor invocation")
                .const_label("component_type", component_type.clone())
                .const_label("component_id", component_id.clone())
                .buckets(DURATION_BUCKETS.to_vec()),
        )?;
        registry.register(Box::new(processing_duration_seconds.clone()))?;

        let broadcast_failures_total = IntCounter::with_opts(opts(
            "broadcast_failures_total",
            "number of output socket sends that failed",
        ))?;
        registry.register(Box::new(broadcast_failures_total.clone()))?;

        Ok(Self {
            registry,
            running,
            starts_total,
            processed_bytes_total,
            processing_duration_seconds,
            broadcast_failures_total,
        })
    }
}
