//! Shutdown coordinator (§4.9): catches termination signals, cancels every
//! tracer consumer, and joins the consumer tasks before the process exits.
//! Each consumer task owns its tracer exclusively and unloads it on the way
//! out (see [`crate::pipeline::run`]), so the coordinator itself only needs
//! to cancel and join.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct ShutdownCoordinator {
    token: CancellationToken,
    consumers: Vec<JoinHandle<()>>,
}

impl ShutdownCoordinator {
    pub fn new(token: CancellationToken) -> Self {
        ShutdownCoordinator {
            token,
            consumers: Vec::new(),
        }
    }

    pub fn track_consumer(&mut self, handle: JoinHandle<()>) {
        self.consumers.push(handle);
    }

    /// Blocks until SIGTERM or SIGINT arrives, then runs the shutdown
    /// sequence: cancel the token and join every consumer task.
    pub async fn wait_for_signal_and_shutdown(self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;

        tokio::select! {
            _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
            _ = sigint.recv() => info!("received SIGINT, shutting down"),
        }

        self.shutdown().await;
        Ok(())
    }

    /// Runs the shutdown sequence directly, without waiting on a signal.
    /// Exposed so tests can drive shutdown deterministically.
    pub async fn shutdown(self) {
        self.token.cancel();

        for handle in self.consumers {
            let _ = handle.await;
        }

        info!("all tracer consumers joined, exiting");
    }
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod tests;
