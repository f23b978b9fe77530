//! Shutdown coordination.
//!
//! Once `signals::listen` is installed the process no longer dies on
//! SIGINT/SIGTERM by itself, so every long-running step has to observe
//! [`Shutdown`]: readiness waits through `wait_with_shutdown`, everything
//! else through [`Shutdown::until_triggered`].

use std::future::Future;

use tokio::sync::broadcast;

/// Returned when a shutdown wins the race against a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("interrupted by shutdown signal")]
pub struct Interrupted;

/// Broadcast handle shared by the signal task and the steps it can stop.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver for waits that poll the signal themselves.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Notify every current subscriber. Later subscribers miss it.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Drive `work` to completion unless a shutdown arrives first, in which
    /// case `work` is dropped mid-flight.
    pub async fn until_triggered<F: Future>(&self, work: F) -> Result<F::Output, Interrupted> {
        let mut signal = self.subscribe();
        tokio::select! {
            output = work => Ok(output),
            _ = signal.recv() => Err(Interrupted),
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
