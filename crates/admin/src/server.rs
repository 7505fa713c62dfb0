// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::routes::router;
use crate::state::AdminState;

/// Serves the admin HTTP surface until `state.exit` is cancelled.
///
/// Deliberately does not install any signal handlers of its own: the
/// source system's `uvicorn.Server` is explicitly configured with
/// `install_signal_handlers = False` so the hosting process retains sole
/// ownership of SIGINT/SIGTERM, and this does the same by relying only
/// on `with_graceful_shutdown` driven by the cancellation token.
pub async fn serve(host: &str, port: u16, state: AdminState) -> std::io::Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse().map_err(|err| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("invalid admin bind address: {err}"))
    })?;
    let exit = state.exit.clone();
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "admin api listening");
    axum::serve(listener, app).with_graceful_shutdown(wait_for_exit(exit)).await
}

async fn wait_for_exit(exit: CancellationToken) {
    exit.cancelled().await;
}
