//! Readiness waits against real sockets, no database required.

use std::time::{Duration, Instant};

use graph_seeder::lifecycle::{startup, Shutdown};
use graph_seeder::readiness::{ReadinessError, ReadinessWaiter, TcpProbe};

mod common;

#[tokio::test]
async fn test_waits_for_late_listener() {
    let addr = common::free_addr().await;
    common::start_listener_after(addr, Duration::from_millis(150));

    let probe = TcpProbe::new(addr.to_string(), Duration::from_millis(100));
    let waiter = ReadinessWaiter::new(50, Duration::from_millis(20));

    let start = Instant::now();
    waiter.wait(&probe).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn test_gives_up_on_closed_port() {
    let addr = common::free_addr().await;

    let probe = TcpProbe::new(addr.to_string(), Duration::from_millis(100));
    let waiter = ReadinessWaiter::new(3, Duration::from_millis(10));

    let err = waiter.wait(&probe).await.unwrap_err();
    assert_eq!(err, ReadinessError::ConnectivityTimeout { attempts: 3 });
}

#[tokio::test]
async fn test_startup_reports_connectivity_timeout() {
    let addr = common::free_addr().await;
    let config = common::config_for(addr, 2, 10);

    let err = startup::connect_when_ready(&config, &Shutdown::new())
        .await
        .unwrap_err();

    match err {
        startup::StartupError::Readiness(e) => {
            assert_eq!(e, ReadinessError::ConnectivityTimeout { attempts: 2 })
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_startup_cancelled_by_shutdown() {
    let addr = common::free_addr().await;
    let config = common::config_for(addr, 1_000, 50);

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(120)).await;
        trigger.trigger();
    });

    let start = Instant::now();
    let err = startup::connect_when_ready(&config, &shutdown)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        startup::StartupError::Readiness(ReadinessError::Cancelled { .. })
    ));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_silent_server_exhausts_budget() {
    let addr = common::start_silent_listener().await;
    let config = common::config_for(addr, 2, 10);

    let outcome = tokio::time::timeout(
        Duration::from_secs(8),
        startup::connect_when_ready(&config, &Shutdown::new()),
    )
    .await
    .expect("readiness wait ignored its attempt budget");

    match outcome {
        Err(startup::StartupError::Readiness(e)) => {
            assert_eq!(e, ReadinessError::ConnectivityTimeout { attempts: 2 })
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("a silent server must not count as ready"),
    }
}

#[tokio::test]
async fn test_shutdown_stops_wait_on_silent_server() {
    let addr = common::start_silent_listener().await;
    let mut config = common::config_for(addr, 1_000, 10);
    config.readiness.connect_timeout_ms = 60_000;

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        trigger.trigger();
    });

    let outcome = tokio::time::timeout(
        Duration::from_secs(8),
        startup::connect_when_ready(&config, &shutdown),
    )
    .await
    .expect("shutdown did not stop the readiness wait");

    assert!(matches!(
        outcome,
        Err(startup::StartupError::Readiness(ReadinessError::Cancelled { .. }))
    ));
}
