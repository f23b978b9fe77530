//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! readiness / graph / lifecycle produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (probe counters, wait histogram)
//! ```
//!
//! # Design Decisions
//! - Structured fields (attempt, statement, counts) instead of formatted strings
//! - Metrics go through the `metrics` facade; without an installed
//!   recorder they cost nothing

pub mod logging;
pub mod metrics;
