// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The processor capability: any value that can turn one message into at
//! most one outgoing message.

/// A pluggable unit of work hosted by the [`Engine`](crate) loop.
///
/// Implementors run on the single engine worker thread and are therefore
/// implicitly single-writer with respect to their own mutable state — no
/// internal synchronization is required. A processor that raises/returns
/// an error does not kill the loop; the error is logged and the next
/// message is processed.
pub trait Processor: Send {
    /// Process one message, optionally producing a message to broadcast.
    /// Returning `Ok(None)` or `Ok(Some(vec![]))` skips the broadcast.
    fn process(&mut self, message: &[u8]) -> Result<Option<Vec<u8>>, ProcessorError>;
}

#[derive(Debug, thiserror::Error)]
#[error("processor error: {0}")]
pub struct ProcessorError(pub String);

impl ProcessorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Pass-through processor used when no plugin was loaded: emits the input
/// unchanged, matching the Service's documented identity-law behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughProcessor;

impl Processor for PassThroughProcessor {
    fn process(&mut self, message: &[u8]) -> Result<Option<Vec<u8>>, ProcessorError> {
        Ok(Some(message.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through_echoes_input() {
        let mut p = PassThroughProcessor;
        let out = p.process(b"hello world").unwrap();
        assert_eq!(out, Some(b"hello world".to_vec()));
    }
}
