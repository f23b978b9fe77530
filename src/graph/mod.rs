//! Graph database access.
//!
//! # Data Flow
//! ```text
//! GraphClient (owns neo4rs::Graph, built once by the orchestrator)
//!     → QueryExecutor (run / fetch_count)
//!         → seed.rs        (fixed developer/technology dataset)
//!         → stats.rs       (node and edge counts)
//!         → maintenance.rs (wipe)
//! ```
//!
//! # Design Decisions
//! - The client is passed explicitly to every operation; there is no
//!   process-wide driver handle
//! - Operations are generic over [`QueryExecutor`]; tests run them
//!   against an in-memory fake

pub mod client;
pub mod maintenance;
pub mod seed;
pub mod stats;

#[cfg(test)]
pub(crate) mod fake;

use std::collections::BTreeMap;
use std::fmt;

pub use client::GraphClient;
pub use stats::GraphStats;

/// Errors from talking to the graph database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("invalid connection settings: {0}")]
    Config(String),

    #[error("could not create driver for {uri}: {message}")]
    Connect { uri: String, message: String },

    #[error("query `{statement}` failed: {message}")]
    Query { statement: String, message: String },

    #[error("could not read column `{column}`: {message}")]
    Decode { column: String, message: String },

    #[error("query `{statement}` returned no rows")]
    EmptyResult { statement: String },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// A query string plus optional named parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub params: BTreeMap<String, ParamValue>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: BTreeMap::new(),
        }
    }

    /// Bind `$key` to `value`.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Statement::new(text)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Minimal query-execution interface used by seeding and counting.
#[allow(async_fn_in_trait)]
pub trait QueryExecutor {
    /// Execute a statement and discard any rows.
    async fn run(&self, statement: &Statement) -> GraphResult<()>;

    /// Execute a statement and read an integer column from the first row.
    async fn fetch_count(&self, statement: &Statement, column: &str) -> GraphResult<i64>;
}
