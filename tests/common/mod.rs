//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use graph_seeder::config::SeederConfig;
use tokio::net::TcpListener;

/// Reserve a local port with nothing listening on it.
pub async fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Start accepting (and immediately dropping) connections on `addr` after `delay`.
#[allow(dead_code)]
pub fn start_listener_after(addr: SocketAddr, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let listener = TcpListener::bind(addr).await.unwrap();
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });
}

/// Config pointing at `addr` with a short readiness budget.
#[allow(dead_code)]
pub fn config_for(addr: SocketAddr, max_attempts: u32, interval_ms: u64) -> SeederConfig {
    let mut config = SeederConfig::default();
    config.connection.uri = format!("bolt://{addr}");
    config.readiness.max_attempts = max_attempts;
    config.readiness.interval_ms = interval_ms;
    config.readiness.connect_timeout_ms = 200;
    config
}

/// Bind a local port that accepts connections and holds them open without
/// ever replying.
#[allow(dead_code)]
pub async fn start_silent_listener() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    addr
}
