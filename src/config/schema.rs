//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the seeder.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the graph seeder.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SeederConfig {
    /// Database connection settings.
    pub connection: ConnectionConfig,

    /// Readiness wait settings.
    pub readiness: ReadinessConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Connection settings for the Bolt endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Bolt URI (e.g., "bolt://localhost:7687").
    pub uri: String,

    /// Username for basic auth.
    pub user: String,

    /// Password for basic auth.
    pub password: String,

    /// Database name sent with every query.
    pub database: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "memgraph".to_string(),
            password: "memgraph".to_string(),
            database: "memgraph".to_string(),
        }
    }
}

/// Readiness wait configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Total number of probes before giving up.
    pub max_attempts: u32,

    /// Fixed delay between probes in milliseconds.
    pub interval_ms: u64,

    /// Time limit for a single probe (TCP connect or driver round-trip)
    /// in milliseconds. A probe that runs longer counts as failed.
    pub connect_timeout_ms: u64,
}

impl ReadinessConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            interval_ms: 1000,
            connect_timeout_ms: 2000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
