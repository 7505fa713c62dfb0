// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("malformed reconfigure payload: {0}")]
    MalformedConfig(#[from] serde_json::Error),

    #[error("malformed reconfigure payload: {0}")]
    MalformedYaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Config(#[from] detectmate_config::ConfigError),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdminError::MalformedConfig(_) => StatusCode::BAD_REQUEST,
            AdminError::MalformedYaml(_) => StatusCode::BAD_REQUEST,
            AdminError::Config(detectmate_config::ConfigError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AdminError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
