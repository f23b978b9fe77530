//! Readiness subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → waiter.rs (bounded poll loop, fixed interval)
//!         → probe.rs (TCP port check, driver round-trip, or a test fake)
//!     → Ok: continue with seeding
//!     → ConnectivityTimeout / Cancelled: caller decides what to do
//! ```
//!
//! # Design Decisions
//! - Constant delay, no backoff or jitter: there is a single caller
//! - Every probe error is treated the same way; only exhaustion surfaces
//! - The waiter never exits the process; termination is the caller's call

pub mod probe;
pub mod waiter;

pub use probe::{Probe, TcpProbe};
pub use waiter::{ReadinessError, ReadinessWaiter};
