// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use async_trait::async_trait;
use detectmate_core::EndpointUri;

use crate::error::TransportError;
use crate::ipc;
use crate::socket::MessageSocket;
use crate::tcp;

/// Creates bound/dialed [`MessageSocket`]s from an [`EndpointUri`],
/// handling the scheme-specific pre-conditions spec §4.1 requires
/// (stale ipc cleanup, tcp address-in-use probing) before handing off to
/// the transport.
#[async_trait]
pub trait SocketFactory: Send + Sync {
    async fn bind(
        &self,
        uri: &EndpointUri,
        recv_timeout: Duration,
    ) -> Result<Box<dyn MessageSocket>, TransportError>;

    async fn dial(&self, uri: &EndpointUri) -> Result<Box<dyn MessageSocket>, TransportError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSocketFactory;

#[async_trait]
impl SocketFactory for DefaultSocketFactory {
    async fn bind(
        &self,
        uri: &EndpointUri,
        recv_timeout: Duration,
    ) -> Result<Box<dyn MessageSocket>, TransportError> {
        match uri {
            EndpointUri::Ipc(path) => {
                Ok(Box::new(ipc::bind(path, recv_timeout)?) as Box<dyn MessageSocket>)
            }
            EndpointUri::Tcp { host, port } => {
                Ok(Box::new(tcp::bind(host, *port, recv_timeout).await?) as Box<dyn MessageSocket>)
            }
        }
    }

    async fn dial(&self, uri: &EndpointUri) -> Result<Box<dyn MessageSocket>, TransportError> {
        match uri {
            EndpointUri::Ipc(path) => Ok(Box::new(ipc::dial(path).await?) as Box<dyn MessageSocket>),
            EndpointUri::Tcp { host, port } => {
                Ok(Box::new(tcp::dial(host, *port).await?) as Box<dyn MessageSocket>)
            }
        }
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
