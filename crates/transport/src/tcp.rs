// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::{TcpListener, TcpStream};

use crate::error::TransportError;
use crate::framing::{read_framed, write_framed};
use crate::socket::MessageSocket;

/// Probe whether `host:port` is already bound locally via a non-blocking
/// connect, per spec §4.1. The probing socket is always dropped before
/// returning so no descriptor lingers.
async fn probe_in_use(host: &str, port: u16) -> Result<bool, TransportError> {
    let addr = format!("{host}:{port}");
    match tokio::time::timeout(Duration::from_millis(200), TcpStream::connect(&addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Ok(true)
        }
        Ok(Err(_)) => Ok(false),
        Err(_elapsed) => Ok(false),
    }
}

pub(crate) async fn bind(
    host: &str,
    port: u16,
    recv_timeout: Duration,
) -> Result<TcpBoundSocket, TransportError> {
    if probe_in_use(host, port).await? {
        return Err(TransportError::AddressInUse(format!("tcp://{host}:{port}")));
    }
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| TransportError::Bind { uri: format!("tcp://{addr}"), source })?;
    Ok(TcpBoundSocket { listener: Some(listener), stream: None, recv_timeout })
}

pub(crate) async fn dial(host: &str, port: u16) -> Result<TcpDialedSocket, TransportError> {
    let addr = format!("{host}:{port}");
    let stream = TcpStream::connect(&addr)
        .await
        .map_err(|source| TransportError::Dial { uri: format!("tcp://{addr}"), source })?;
    Ok(TcpDialedSocket { stream: Some(stream) })
}

pub struct TcpBoundSocket {
    listener: Option<TcpListener>,
    stream: Option<TcpStream>,
    recv_timeout: Duration,
}

impl TcpBoundSocket {
    #[allow(clippy::expect_used)]
    async fn ensure_connected(&mut self) -> Result<&mut TcpStream, TransportError> {
        if self.stream.is_none() {
            let listener = self.listener.as_ref().ok_or(TransportError::Closed)?;
            let (stream, _addr) = listener.accept().await?;
            self.stream = Some(stream);
        }
        Ok(self.stream.as_mut().expect("just set"))
    }
}

#[async_trait]
impl MessageSocket for TcpBoundSocket {
    async fn recv(&mut self) -> Result<Vec<u8>, TransportError> {
        let timeout = self.recv_timeout;
        match tokio::time::timeout(timeout, async {
            let stream = self.ensure_connected().await?;
            read_framed(stream).await
        })
        .await
        {
            Ok(result) => result,
            Err(_elapsed) => Err(TransportError::Timeout),
        }
    }

    async fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        let stream = self.ensure_connected().await?;
        write_framed(stream, payload).await
    }

    async fn close(&mut self) {
        self.stream = None;
        self.listener = None;
    }
}

pub struct TcpDialedSocket {
    stream: Option<TcpStream>,
}

#[async_trait]
impl MessageSocket for TcpDialedSocket {
    async fn recv(&mut self) -> Result<Vec<u8>, TransportError> {
        let stream = self.stream.as_mut().ok_or(TransportError::Closed)?;
        read_framed(stream).await
    }

    async fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        let stream = self.stream.as_mut().ok_or(TransportError::Closed)?;
        write_framed(stream, payload).await
    }

    async fn close(&mut self) {
        self.stream = None;
    }
}
