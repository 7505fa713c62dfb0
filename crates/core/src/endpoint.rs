// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Endpoint URI grammar: `ipc://<path>` or `tcp://<host>:<port>`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parsed, validated transport endpoint address.
///
/// Only `ipc://` and `tcp://` schemes are accepted; anything else is
/// rejected at construction so malformed addresses never reach the
/// transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EndpointUri {
    Ipc(PathBuf),
    Tcp { host: String, port: u16 },
}

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("unsupported scheme in endpoint uri {0:?}")]
    UnsupportedScheme(String),
    #[error("missing path in ipc endpoint uri {0:?}")]
    MissingPath(String),
    #[error("missing or invalid port in tcp endpoint uri {0:?}")]
    MissingPort(String),
}

impl FromStr for EndpointUri {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(path) = s.strip_prefix("ipc://") {
            if path.is_empty() {
                return Err(EndpointError::MissingPath(s.to_string()));
            }
            return Ok(EndpointUri::Ipc(PathBuf::from(path)));
        }
        if let Some(rest) = s.strip_prefix("tcp://") {
            let (host, port) = rest
                .rsplit_once(':')
                .ok_or_else(|| EndpointError::MissingPort(s.to_string()))?;
            let port: u16 = port
                .parse()
                .map_err(|_| EndpointError::MissingPort(s.to_string()))?;
            if host.is_empty() {
                return Err(EndpointError::MissingPort(s.to_string()));
            }
            return Ok(EndpointUri::Tcp { host: host.to_string(), port });
        }
        Err(EndpointError::UnsupportedScheme(s.to_string()))
    }
}

impl fmt::Display for EndpointUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointUri::Ipc(path) => write!(f, "ipc://{}", path.display()),
            EndpointUri::Tcp { host, port } => write!(f, "tcp://{host}:{port}"),
        }
    }
}

impl TryFrom<String> for EndpointUri {
    type Error = EndpointError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EndpointUri> for String {
    fn from(value: EndpointUri) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
