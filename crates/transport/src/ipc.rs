// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::{UnixListener, UnixStream};
use tracing::error;

use crate::error::TransportError;
use crate::framing::{read_framed, write_framed};
use crate::socket::MessageSocket;

/// Remove a stale ipc path before binding, per spec §4.1: unlink failures
/// other than "not found" are fatal.
pub(crate) fn clean_stale_path(path: &Path) -> Result<(), TransportError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => {
            Err(TransportError::StaleIpcCleanup { path: path.display().to_string(), source })
        }
    }
}

pub(crate) fn bind(path: &Path, recv_timeout: Duration) -> Result<IpcBoundSocket, TransportError> {
    clean_stale_path(path)?;
    let listener = UnixListener::bind(path)
        .map_err(|source| TransportError::Bind { uri: format!("ipc://{}", path.display()), source })?;
    Ok(IpcBoundSocket {
        listener: Some(listener),
        stream: None,
        recv_timeout,
        path: path.to_path_buf(),
    })
}

pub(crate) async fn dial(path: &Path) -> Result<IpcDialedSocket, TransportError> {
    let stream = UnixStream::connect(path)
        .await
        .map_err(|source| TransportError::Dial { uri: format!("ipc://{}", path.display()), source })?;
    Ok(IpcDialedSocket { stream: Some(stream) })
}

pub struct IpcBoundSocket {
    listener: Option<UnixListener>,
    stream: Option<UnixStream>,
    recv_timeout: Duration,
    path: PathBuf,
}

impl IpcBoundSocket {
    #[allow(clippy::expect_used)]
    async fn ensure_connected(&mut self) -> Result<&mut UnixStream, TransportError> {
        if self.stream.is_none() {
            let listener = self.listener.as_ref().ok_or(TransportError::Closed)?;
            let (stream, _addr) = listener.accept().await?;
            self.stream = Some(stream);
        }
        Ok(self.stream.as_mut().expect("just set"))
    }
}

#[async_trait]
impl MessageSocket for IpcBoundSocket {
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
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                error!(path = %self.path.display(), error = %e, "failed to remove ipc path on close");
            }
        }
    }
}

pub struct IpcDialedSocket {
    stream: Option<UnixStream>,
}

#[async_trait]
impl MessageSocket for IpcDialedSocket {
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
