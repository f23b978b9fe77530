//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All problems are
//! collected so a bad config file can be fixed in one pass.

use std::fmt;

use url::Url;

use crate::config::schema::SeederConfig;

const BOLT_SCHEMES: &[&str] = &["bolt", "bolt+s", "bolt+ssc", "neo4j", "neo4j+s", "neo4j+ssc"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, returning every problem found.
pub fn validate_config(config: &SeederConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.connection.uri) {
        Ok(url) => {
            if !BOLT_SCHEMES.contains(&url.scheme()) {
                errors.push(ValidationError::new(
                    "connection.uri",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
            if url.host_str().map_or(true, str::is_empty) {
                errors.push(ValidationError::new("connection.uri", "missing host"));
            }
        }
        Err(e) => errors.push(ValidationError::new("connection.uri", e.to_string())),
    }

    if config.connection.database.trim().is_empty() {
        errors.push(ValidationError::new("connection.database", "must not be empty"));
    }

    if config.readiness.max_attempts == 0 {
        errors.push(ValidationError::new("readiness.max_attempts", "must be at least 1"));
    }
    if config.readiness.interval_ms == 0 {
        errors.push(ValidationError::new("readiness.interval_ms", "must be greater than 0"));
    }
    if config.readiness.connect_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "readiness.connect_timeout_ms",
            "must be greater than 0",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
