// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! detectmate-core: shared types for the DetectMate component runtime.
//!
//! Every process-hosting crate (transport, config, plugin, engine, admin,
//! service) depends on this crate for the identity model, the endpoint URI
//! grammar, process settings, and the processor capability trait.

pub mod endpoint;
pub mod identity;
pub mod processor;
pub mod settings;

pub use endpoint::{EndpointError, EndpointUri};
pub use identity::ComponentIdentity;
pub use processor::{PassThroughProcessor, Processor, ProcessorError};
pub use settings::{Settings, SettingsError};
