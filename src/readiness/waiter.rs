//! Bounded readiness wait.
//!
//! # Algorithm
//! ```text
//! attempts = 0
//! loop:
//!     attempts += 1
//!     probe ok         → return Ok
//!     attempts >= max  → ConnectivityTimeout { attempts }
//!     sleep(interval)
//! ```
//!
//! `max_attempts` is the total number of probes: an always-failing probe
//! is called exactly `max_attempts` times. With a probe timeout set, a probe
//! that does not answer in time counts as a failed attempt. A shutdown
//! signal ends the wait with `Cancelled` whether it arrives during a probe
//! or during the sleep.

use std::time::{Duration, Instant};

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time;

use crate::config::ReadinessConfig;
use crate::observability::metrics;
use crate::readiness::probe::Probe;

/// Errors surfaced by a readiness wait.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadinessError {
    /// Every allowed probe failed.
    #[error("dependency still unreachable after {attempts} attempts")]
    ConnectivityTimeout { attempts: u32 },

    /// Shutdown was requested before the dependency became ready.
    #[error("readiness wait cancelled after {attempts} attempts")]
    Cancelled { attempts: u32 },
}

impl ReadinessError {
    /// Number of probes started before the wait ended.
    pub fn attempts(&self) -> u32 {
        match self {
            ReadinessError::ConnectivityTimeout { attempts }
            | ReadinessError::Cancelled { attempts } => *attempts,
        }
    }
}

/// Polls a [`Probe`] on a fixed interval until it succeeds or the attempt
/// budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessWaiter {
    max_attempts: u32,
    interval: Duration,
    probe_timeout: Option<Duration>,
}

impl ReadinessWaiter {
    /// Create a waiter. A `max_attempts` of zero still probes once.
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
            probe_timeout: None,
        }
    }

    /// Fail any single probe that takes longer than `limit`.
    pub fn with_probe_timeout(mut self, limit: Duration) -> Self {
        self.probe_timeout = Some(limit);
        self
    }

    pub fn from_config(config: &ReadinessConfig) -> Self {
        Self::new(config.max_attempts, config.interval())
            .with_probe_timeout(config.connect_timeout())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout
    }

    /// Block until `probe` succeeds or attempts are exhausted.
    pub async fn wait<P: Probe>(&self, probe: &P) -> Result<(), ReadinessError> {
        self.run(probe, None).await
    }

    /// Like [`wait`](Self::wait), but aborts promptly when `shutdown` fires,
    /// including while a probe is still in flight.
    pub async fn wait_with_shutdown<P: Probe>(
        &self,
        probe: &P,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> Result<(), ReadinessError> {
        self.run(probe, Some(shutdown)).await
    }

    async fn run<P: Probe>(
        &self,
        probe: &P,
        mut shutdown: Option<&mut broadcast::Receiver<()>>,
    ) -> Result<(), ReadinessError> {
        let started = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            let outcome = match shutdown.as_deref_mut() {
                Some(rx) => tokio::select! {
                    outcome = self.attempt(probe) => outcome,
                    _ = shutdown_requested(rx) => return Err(cancelled(attempts, started)),
                },
                None => self.attempt(probe).await,
            };

            match outcome {
                Ok(()) => {
                    metrics::record_probe("success");
                    metrics::record_readiness_wait("ready", started.elapsed());
                    tracing::info!(attempt = attempts, "Connected to graph database");
                    return Ok(());
                }
                Err(reason) => {
                    metrics::record_probe("failure");
                    tracing::error!(
                        attempt = attempts,
                        max_attempts = self.max_attempts,
                        error = %reason,
                        "Could not connect to graph database"
                    );
                }
            }

            if attempts >= self.max_attempts {
                metrics::record_readiness_wait("timeout", started.elapsed());
                return Err(ReadinessError::ConnectivityTimeout { attempts });
            }

            match shutdown.as_deref_mut() {
                Some(rx) => tokio::select! {
                    _ = time::sleep(self.interval) => {}
                    _ = shutdown_requested(rx) => return Err(cancelled(attempts, started)),
                },
                None => time::sleep(self.interval).await,
            }
        }
    }

    /// One probe, bounded by the probe timeout when set.
    async fn attempt<P: Probe>(&self, probe: &P) -> Result<(), String> {
        match self.probe_timeout {
            Some(limit) => match time::timeout(limit, probe.probe()).await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(_) => Err(format!("no response within {limit:?}")),
            },
            None => probe.probe().await.map_err(|e| e.to_string()),
        }
    }
}

impl Default for ReadinessWaiter {
    fn default() -> Self {
        Self::from_config(&ReadinessConfig::default())
    }
}

fn cancelled(attempts: u32, started: Instant) -> ReadinessError {
    tracing::warn!(attempt = attempts, "Readiness wait cancelled by shutdown");
    metrics::record_readiness_wait("cancelled", started.elapsed());
    ReadinessError::Cancelled { attempts }
}

/// Resolves when a shutdown is signalled. A dropped sender never resolves.
async fn shutdown_requested(rx: &mut broadcast::Receiver<()>) {
    match rx.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        Err(RecvError::Closed) => std::future::pending::<()>().await,
    }
}
