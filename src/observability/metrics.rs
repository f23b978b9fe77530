//! Metrics recording.
//!
//! # Metrics
//! - `graph_seeder_probe_attempts_total` (counter): probes by outcome
//! - `graph_seeder_readiness_wait_seconds` (histogram): total wait by result
//! - `graph_seeder_statements_total` (counter): executed statements by outcome

use std::time::Duration;

/// Record the outcome of a single readiness probe.
pub fn record_probe(outcome: &'static str) {
    metrics::counter!("graph_seeder_probe_attempts_total", "outcome" => outcome).increment(1);
}

/// Record how long a readiness wait took and how it ended.
pub fn record_readiness_wait(result: &'static str, elapsed: Duration) {
    metrics::histogram!("graph_seeder_readiness_wait_seconds", "result" => result)
        .record(elapsed.as_secs_f64());
}

/// Record a statement sent to the database.
pub fn record_statement(outcome: &'static str) {
    metrics::counter!("graph_seeder_statements_total", "outcome" => outcome).increment(1);
}
