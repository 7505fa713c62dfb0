// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for this crate's own tests.

use detectmate_config::schema_for;
use detectmate_core::PassThroughProcessor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::descriptor::PluginDescriptor;
use crate::error::PluginError;

#[derive(Debug, Serialize, Deserialize, JsonSchema, Default)]
pub struct EchoConfig {}

pub fn echo_descriptor(dotted_path: &'static str, short_name: &'static str) -> PluginDescriptor {
    PluginDescriptor {
        dotted_path,
        short_name,
        component_type: "detector",
        config_schema: || schema_for::<EchoConfig>(),
        build: |_config| Ok(Box::new(PassThroughProcessor)),
    }
}

pub fn failing_descriptor(dotted_path: &'static str, short_name: &'static str) -> PluginDescriptor {
    PluginDescriptor {
        dotted_path,
        short_name,
        component_type: "detector",
        config_schema: || schema_for::<EchoConfig>(),
        build: |_config| Err(PluginError::Build { name: dotted_path.to_string(), message: "boom".to_string() }),
    }
}
