//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → wait for port → wait for driver → seed → count
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Broadcast → readiness wait returns Cancelled,
//!                 seed / count / wipe return Interrupted
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error ends the run
//! - The driver handle is owned by the caller of startup and dropped on
//!   every exit path

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Interrupted, Shutdown};
