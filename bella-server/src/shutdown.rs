//! Graceful shutdown on SIGINT / SIGTERM
//!
//! The coordinator fans a single shutdown signal out to every subscriber;
//! the HTTP server stops accepting connections and drains the rest.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    is_shutting_down: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            shutdown_tx,
            shutdown_rx,
            is_shutting_down: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.is_shutting_down.load(Ordering::SeqCst)
    }

    /// Initiate shutdown; repeated calls are ignored
    pub fn shutdown(&self) {
        if self.is_shutting_down.swap(true, Ordering::SeqCst) {
            return;
        }

        info!("Initiating graceful shutdown...");
        let _ = self.shutdown_tx.send(true);
    }

    /// Resolves once `shutdown` has been called
    pub async fn wait(&self) {
        let mut rx = self.shutdown_rx.clone();
        // the sender lives in `self`, so this only errors if it was dropped
        let _ = rx.wait_for(|stopped| *stopped).await;
    }

    /// Wait for an OS signal, then trigger shutdown
    pub async fn wait_for_signal(&self) {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = sigterm.recv() => info!("Received SIGTERM"),
                        result = tokio::signal::ctrl_c() => log_ctrl_c(result),
                    }
                }
                Err(e) => {
                    warn!("Failed to register SIGTERM handler: {}", e);
                    log_ctrl_c(tokio::signal::ctrl_c().await);
                }
            }
        }

        #[cfg(not(unix))]
        log_ctrl_c(tokio::signal::ctrl_c().await);

        self.shutdown();
    }
}

fn log_ctrl_c(result: std::io::Result<()>) {
    match result {
        Ok(()) => info!("Received SIGINT"),
        Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
