// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Component identity: `{type, id}`, stable for the process lifetime.
//!
//! All metrics and log records are labelled by this pair.

use std::fmt;

use uuid::Uuid;

use crate::endpoint::EndpointUri;

/// Stable identity of the hosted component, derived once at `Settings`
/// construction and carried unchanged for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentIdentity {
    pub component_type: String,
    pub id: Uuid,
}

impl ComponentIdentity {
    /// Derive an identity per the §3 rule:
    /// explicit id wins; else a name-derived UUIDv5; else an
    /// address-derived UUIDv5. Deterministic across restarts so the same
    /// `Settings` always produce the same id.
    pub fn derive(
        component_type: &str,
        explicit_id: Option<Uuid>,
        component_name: Option<&str>,
        engine_addr: &EndpointUri,
        out_addr: &[EndpointUri],
    ) -> Self {
        let id = if let Some(id) = explicit_id {
            id
        } else if let Some(name) = component_name {
            let seed = format!("detectmate/{component_type}/{name}");
            Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.as_bytes())
        } else {
            let joined_out = out_addr.iter().map(|u| u.to_string()).collect::<Vec<_>>().join(",");
            let seed = format!("detectmate/{component_type}|{engine_addr}|{joined_out}");
            Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.as_bytes())
        };
        Self { component_type: component_type.to_string(), id }
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.component_type, self.id)
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
