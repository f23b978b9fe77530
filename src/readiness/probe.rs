//! Connectivity probes.
//!
//! A probe is a single, idempotent "are you there?" check against an
//! external dependency. The waiter only cares whether it succeeded; the
//! error is kept around long enough to be logged.

use std::fmt;
use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time;

/// A cheap, side-effect-free connectivity check.
#[allow(async_fn_in_trait)]
pub trait Probe {
    type Error: fmt::Display;

    /// Check connectivity once.
    async fn probe(&self) -> Result<(), Self::Error>;
}

impl<F, Fut, E> Probe for F
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: fmt::Display,
{
    type Error = E;

    async fn probe(&self) -> Result<(), E> {
        (self)().await
    }
}

/// Probe that succeeds once a TCP listener accepts a connection.
///
/// Useful before the driver is even constructed, e.g. while a container
/// is still starting and nothing is bound to the Bolt port yet.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    address: String,
    timeout: Duration,
}

impl TcpProbe {
    /// Create a probe for `host:port`.
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Probe for TcpProbe {
    type Error = io::Error;

    async fn probe(&self) -> Result<(), io::Error> {
        match time::timeout(self.timeout, TcpStream::connect(&self.address)).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("connect to {} timed out after {:?}", self.address, self.timeout),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_closure_probe() {
        let ok = || async { Ok::<(), String>(()) };
        assert!(ok.probe().await.is_ok());

        let failing = || async { Err::<(), _>("refused") };
        assert_eq!(failing.probe().await.unwrap_err(), "refused");
    }

    #[tokio::test]
    async fn test_tcp_probe_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = TcpProbe::new(addr.to_string(), Duration::from_secs(1));
        assert!(probe.probe().await.is_ok());
    }

    #[tokio::test]
    async fn test_tcp_probe_closed_port() {
        // Bind then drop to get a port nothing is listening on.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let probe = TcpProbe::new(addr.to_string(), Duration::from_secs(1));
        assert!(probe.probe().await.is_err());
    }
}
