//! Startup orchestration.
//!
//! # Order
//! ```text
//! wait for Bolt port (TcpProbe)
//!     → create driver + wait for a successful round-trip (GraphClient probe)
//!     → hand the client to the caller, who owns it until exit
//! ```
//!
//! Each wait gets the full configured attempt budget. A shutdown signal
//! aborts whichever wait is in progress.

use tokio::sync::OnceCell;

use crate::config::SeederConfig;
use crate::graph::client::bolt_address;
use crate::graph::{seed, stats, GraphClient, GraphError, GraphStats};
use crate::lifecycle::{Interrupted, Shutdown};
use crate::readiness::{Probe, ReadinessError, ReadinessWaiter, TcpProbe};

/// Anything that stops the seeder before it finishes.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("graph database is not ready: {0}")]
    Readiness(#[from] ReadinessError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

/// Wait for the database and return a client that has completed at least
/// one successful query.
pub async fn connect_when_ready(
    config: &SeederConfig,
    shutdown: &Shutdown,
) -> Result<GraphClient, StartupError> {
    let waiter = ReadinessWaiter::from_config(&config.readiness);
    let mut signal = shutdown.subscribe();

    let tcp = TcpProbe::new(
        bolt_address(&config.connection.uri)?,
        config.readiness.connect_timeout(),
    );
    tracing::info!(
        address = tcp.address(),
        max_attempts = waiter.max_attempts(),
        interval_ms = waiter.interval().as_millis() as u64,
        "Waiting for Bolt port"
    );
    waiter.wait_with_shutdown(&tcp, &mut signal).await?;

    // The driver itself is created inside the probe so a refused handshake
    // is retried like any other probe failure.
    let cell = OnceCell::new();
    let (cell_ref, connection) = (&cell, &config.connection);
    let driver_probe = move || async move {
        let client = cell_ref
            .get_or_try_init(|| GraphClient::connect(connection))
            .await?;
        client.probe().await
    };
    waiter.wait_with_shutdown(&driver_probe, &mut signal).await?;

    cell.into_inner()
        .ok_or_else(|| GraphError::Config("driver was never created".into()).into())
}

/// The default flow: wait, seed, count.
pub async fn run(config: &SeederConfig, shutdown: &Shutdown) -> Result<GraphStats, StartupError> {
    let client = connect_when_ready(config, shutdown).await?;

    shutdown.until_triggered(seed::insert_data(&client)).await??;
    let totals = shutdown.until_triggered(stats::collect(&client)).await??;

    Ok(totals)
}
