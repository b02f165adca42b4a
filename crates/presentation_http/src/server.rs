//! Server lifecycle
//!
//! Graceful shutdown with a drain deadline: once the shutdown future
//! resolves, in-flight requests get `drain_timeout` to finish before the
//! server stops waiting for them.

use std::{future::Future, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves and open requests drain
///
/// # Errors
///
/// Returns any I/O error from the listener.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
    drain_timeout: Duration,
) -> std::io::Result<()> {
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let deadline = async move {
        if signalled_rx.await.is_ok() {
            info!("Waiting up to {:?} for connections to close", drain_timeout);
            tokio::time::sleep(drain_timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            warn!(timeout = ?drain_timeout, "Drain deadline reached, dropping open connections");
            Ok(())
        }
    }
}
