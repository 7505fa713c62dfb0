// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use detectmate_core::Settings;
use detectmate_engine::EngineState;
use prometheus::{Encoder, TextEncoder};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::AdminError;
use crate::state::AdminState;

pub fn router(state: AdminState) -> Router {
    Router::new()
        .route("/admin/start", post(start))
        .route("/admin/stop", post(stop))
        .route("/admin/status", get(status))
        .route("/admin/reconfigure", post(reconfigure))
        .route("/admin/shutdown", post(shutdown))
        .route("/metrics", get(metrics))
        .with_state(Arc::new(state))
}

fn message(result: impl Into<String>) -> Json<serde_json::Value> {
    Json(json!({ "message": result.into() }))
}

/// Renders [`Settings`] as the scalar-only tree §4.6 wants in a status
/// report: paths become display strings, endpoints their uri form,
/// durations whole milliseconds.
fn settings_snapshot(settings: &Settings) -> serde_json::Value {
    json!({
        "component_name": settings.component_name,
        "component_type": settings.component_type,
        "component_config_class": settings.component_config_class,
        "log_dir": settings.log_dir.display().to_string(),
        "log_level": settings.log_level,
        "log_to_console": settings.log_to_console,
        "log_to_file": settings.log_to_file,
        "engine_addr": settings.engine_addr.to_string(),
        "out_addr": settings.out_addr.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "http_host": settings.http_host,
        "http_port": settings.http_port,
        "engine_autostart": settings.engine_autostart,
        "engine_recv_timeout_ms": settings.engine_recv_timeout.as_millis() as u64,
        "config_file": settings.config_file.as_ref().map(|p| p.display().to_string()),
    })
}

fn status_report(state: &AdminState) -> serde_json::Value {
    let identity = state.engine.identity();
    let configs = state.config.as_ref().map(|c| detectmate_config::yaml_to_json(&c.get())).unwrap_or(json!({}));
    json!({
        "status": {
            "component_type": identity.component_type,
            "component_id": identity.id.to_string(),
            "running": state.engine.state() == EngineState::Running,
        },
        "settings": settings_snapshot(&state.settings),
        "configs": configs,
    })
}

async fn start(State(state): State<Arc<AdminState>>) -> impl IntoResponse {
    let result = if state.engine.state() == EngineState::Running {
        "start: already running"
    } else {
        state.engine.start();
        "start: ok"
    };
    message(result)
}

async fn stop(State(state): State<Arc<AdminState>>) -> impl IntoResponse {
    let result = if state.engine.state() == EngineState::Stopped {
        "stop: already stopped"
    } else {
        state.engine.stop();
        "stop: ok"
    };
    message(result)
}

async fn status(State(state): State<Arc<AdminState>>) -> impl IntoResponse {
    Json(status_report(&state))
}

#[derive(Debug, Deserialize)]
pub struct ReconfigPayload {
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub persist: bool,
}

async fn reconfigure(
    State(state): State<Arc<AdminState>>,
    Json(payload): Json<ReconfigPayload>,
) -> Result<impl IntoResponse, AdminError> {
    let Some(config) = state.config.as_ref() else {
        return Ok(message("reconfigure: no config manager configured"));
    };
    let tree: serde_yaml::Value = serde_yaml::from_str(&serde_json::to_string(&payload.config)?)?;
    let changed = config.update(tree, payload.persist)?;
    let result = if changed { "reconfigure: ok" } else { "reconfigure: no-op (empty config data)" };
    Ok(message(result))
}

async fn shutdown(State(state): State<Arc<AdminState>>) -> impl IntoResponse {
    info!("shutdown requested via admin api");
    state.engine.shutdown();
    state.exit.cancel();
    message("shutdown: ok")
}

async fn metrics(State(state): State<Arc<AdminState>>) -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let families = state.engine.metrics().registry.gather();
    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&families, &mut buffer) {
        tracing::error!(error = %err, "failed to encode metrics");
        return (StatusCode::INTERNAL_SERVER_ERROR, Vec::new());
    }
    (StatusCode::OK, buffer)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
