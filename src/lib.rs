//! Seed a Bolt graph database once it becomes reachable.

pub mod config;
pub mod graph;
pub mod lifecycle;
pub mod observability;
pub mod readiness;

pub use config::SeederConfig;
pub use lifecycle::Shutdown;
pub use readiness::{Probe, ReadinessError, ReadinessWaiter};
