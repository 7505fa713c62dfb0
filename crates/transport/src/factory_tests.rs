// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use super::*;

fn ipc_uri(dir: &tempfile::TempDir, name: &str) -> EndpointUri {
    EndpointUri::Ipc(dir.path().join(name))
}

#[tokio::test]
async fn ipc_bind_and_dial_exchange_a_message() {
    let dir = tempfile::tempdir().unwrap();
    let uri = ipc_uri(&dir, "engine.ipc");
    let factory = DefaultSocketFactory;

    let mut bound = factory.bind(&uri, Duration::from_millis(500)).await.unwrap();
    let dial_uri = uri.clone();
    let dialer = tokio::spawn(async move {
        let factory = DefaultSocketFactory;
        let mut sock = factory.dial(&dial_uri).await.unwrap();
        sock.send(b"hello").await.unwrap();
        sock
    });

    let received = bound.recv().await.unwrap();
    assert_eq!(received, b"hello");
    dialer.await.unwrap();
}

#[tokio::test]
async fn ipc_bind_cleans_up_stale_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stale.ipc");
    std::fs::write(&path, b"stale").unwrap();
    let uri = EndpointUri::Ipc(path);
    let factory = DefaultSocketFactory;
    factory.bind(&uri, Duration::from_millis(100)).await.unwrap();
}

#[tokio::test]
async fn ipc_recv_times_out_without_a_peer() {
    let dir = tempfile::tempdir().unwrap();
    let uri = ipc_uri(&dir, "lonely.ipc");
    let factory = DefaultSocketFactory;
    let mut bound = factory.bind(&uri, Duration::from_millis(50)).await.unwrap();
    let err = bound.recv().await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout));
}

#[tokio::test]
async fn closed_socket_rejects_further_sends() {
    let dir = tempfile::tempdir().unwrap();
    let uri = ipc_uri(&dir, "closing.ipc");
    let factory = DefaultSocketFactory;
    let mut bound = factory.bind(&uri, Duration::from_millis(100)).await.unwrap();
    bound.close().await;
    let err = bound.send(b"x").await.unwrap_err();
    assert!(matches!(err, TransportError::Closed));
}

#[tokio::test]
async fn tcp_bind_and_dial_exchange_a_message() {
    let factory = DefaultSocketFactory;
    // port 0 isn't supported by our probe/bind pair (we need a fixed,
    // known port to dial), so pick a high, likely-free ephemeral port.
    let port = 18_372;
    let uri = EndpointUri::Tcp { host: "127.0.0.1".to_string(), port };

    let mut bound = factory.bind(&uri, Duration::from_millis(500)).await.unwrap();
    let dial_uri = uri.clone();
    let dialer = tokio::spawn(async move {
        let factory = DefaultSocketFactory;
        let mut sock = factory.dial(&dial_uri).await.unwrap();
        sock.send(b"ping").await.unwrap();
    });

    let received = bound.recv().await.unwrap();
    assert_eq!(received, b"ping");
    dialer.await.unwrap();
}

#[tokio::test]
async fn tcp_bind_rejects_address_already_in_use() {
    let factory = DefaultSocketFactory;
    let port = 18_373;
    let uri = EndpointUri::Tcp { host: "127.0.0.1".to_string(), port };
    let _first = factory.bind(&uri, Duration::from_millis(100)).await.unwrap();
    let err = factory.bind(&uri, Duration::from_millis(100)).await.unwrap_err();
    assert!(matches!(err, TransportError::AddressInUse(_)));
}
