// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;

use crate::error::TransportError;

/// A symmetric, bidirectional, message-framed socket between exactly two
/// peers. `recv` honors whatever timeout the socket was created with
/// (spec §4.1); a timeout surfaces as [`TransportError::Timeout`], which
/// the engine loop treats as "no message" rather than a fatal error.
#[async_trait]
pub trait MessageSocket: Send {
    async fn recv(&mut self) -> Result<Vec<u8>, TransportError>;
    async fn send(&mut self, payload: &[u8]) -> Result<(), TransportError>;
    async fn close(&mut self);
}
