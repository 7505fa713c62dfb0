// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use async_trait::async_trait;
use detectmate_core::{ComponentIdentity, ProcessorError};
use tokio::sync::mpsc;

use super::*;

struct ChannelInput {
    rx: mpsc::UnboundedReceiver<Vec<u8>>,
}

#[async_trait]
impl MessageSocket for ChannelInput {
    async fn recv(&mut self) -> Result<Vec<u8>, TransportError> {
        self.rx.recv().await.ok_or(TransportError::Closed)
    }

    async fn send(&mut self, _payload: &[u8]) -> Result<(), TransportError> {
        unreachable!("test input socket is never sent to")
    }

    async fn close(&mut self) {
        self.rx.close();
    }
}

struct ChannelOutput {
    tx: mpsc::UnboundedSender<Vec<u8>>,
}

#[async_trait]
impl MessageSocket for ChannelOutput {
    async fn recv(&mut self) -> Result<Vec<u8>, TransportError> {
        unreachable!("test output socket is never received from")
    }

    async fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        self.tx.send(payload.to_vec()).map_err(|_| TransportError::Closed)
    }

    async fn close(&mut self) {}
}

struct UppercaseProcessor;

impl Processor for UppercaseProcessor {
    fn process(&mut self, message: &[u8]) -> Result<Option<Vec<u8>>, ProcessorError> {
        Ok(Some(message.to_ascii_uppercase()))
    }
}

struct SilentProcessor;

impl Processor for SilentProcessor {
    fn process(&mut self, _message: &[u8]) -> Result<Option<Vec<u8>>, ProcessorError> {
        Ok(None)
    }
}

fn identity() -> ComponentIdentity {
    let engine_addr = detectmate_core::EndpointUri::Ipc("/tmp/engine.ipc".into());
    ComponentIdentity::derive("detector", None, Some("test"), &engine_addr, &[])
}

#[tokio::test]
async fn processes_a_message_and_broadcasts_the_result() {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (output_tx, mut output_rx) = mpsc::unbounded_channel();
    let input: Box<dyn MessageSocket> = Box::new(ChannelInput { rx: input_rx });
    let outputs = OutputRegistry::new(vec![(
        detectmate_core::EndpointUri::Tcp { host: "127.0.0.1".to_string(), port: 1 },
        Box::new(ChannelOutput { tx: output_tx }),
    )]);
    let metrics = Arc::new(EngineMetrics::new(&identity()).unwrap());
    let (engine, handle) = Engine::new(identity(), input, outputs, Box::new(UppercaseProcessor), metrics, true);
    let join = tokio::spawn(engine.run());

    input_tx.send(b"hello".to_vec()).unwrap();
    let out = output_rx.recv().await.unwrap();
    assert_eq!(out, b"HELLO");

    handle.shutdown();
    join.await.unwrap();
}

#[tokio::test]
async fn a_none_result_produces_no_broadcast() {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (output_tx, mut output_rx) = mpsc::unbounded_channel();
    let input: Box<dyn MessageSocket> = Box::new(ChannelInput { rx: input_rx });
    let outputs = OutputRegistry::new(vec![(
        detectmate_core::EndpointUri::Tcp { host: "127.0.0.1".to_string(), port: 2 },
        Box::new(ChannelOutput { tx: output_tx }),
    )]);
    let metrics = Arc::new(EngineMetrics::new(&identity()).unwrap());
    let (engine, handle) = Engine::new(identity(), input, outputs, Box::new(SilentProcessor), metrics, true);
    let join = tokio::spawn(engine.run());

    input_tx.send(b"anything".to_vec()).unwrap();
    // give the loop a chance to process before asserting silence
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(output_rx.try_recv().is_err());

    handle.shutdown();
    join.await.unwrap();
}

#[tokio::test]
async fn without_autostart_the_engine_waits_for_an_explicit_start() {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (output_tx, mut output_rx) = mpsc::unbounded_channel();
    let input: Box<dyn MessageSocket> = Box::new(ChannelInput { rx: input_rx });
    let outputs = OutputRegistry::new(vec![(
        detectmate_core::EndpointUri::Tcp { host: "127.0.0.1".to_string(), port: 3 },
        Box::new(ChannelOutput { tx: output_tx }),
    )]);
    let metrics = Arc::new(EngineMetrics::new(&identity()).unwrap());
    let (engine, handle) = Engine::new(identity(), input, outputs, Box::new(UppercaseProcessor), metrics, false);
    assert_eq!(handle.state(), EngineState::Idle);
    let join = tokio::spawn(engine.run());

    input_tx.send(b"queued".to_vec()).unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(output_rx.try_recv().is_err());

    handle.start();
    let out = output_rx.recv().await.unwrap();
    assert_eq!(out, b"QUEUED");

    handle.shutdown();
    join.await.unwrap();
}

#[tokio::test]
async fn stop_and_start_are_idempotent() {
    let (_input_tx, input_rx) = mpsc::unbounded_channel();
    let input: Box<dyn MessageSocket> = Box::new(ChannelInput { rx: input_rx });
    let outputs = OutputRegistry::new(vec![]);
    let metrics = Arc::new(EngineMetrics::new(&identity()).unwrap());
    let (engine, handle) = Engine::new(identity(), input, outputs, Box::new(SilentProcessor), metrics, false);
    let join = tokio::spawn(engine.run());

    handle.start();
    handle.start();
    assert_eq!(handle.state(), EngineState::Running);
    handle.stop();
    handle.stop();
    assert_eq!(handle.state(), EngineState::Stopped);

    handle.shutdown();
    join.await.unwrap();
}
