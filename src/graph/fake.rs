//! In-memory [`QueryExecutor`] for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::graph::{GraphError, GraphResult, QueryExecutor, Statement};

#[derive(Default)]
pub(crate) struct RecordingExecutor {
    pub executed: Mutex<Vec<String>>,
    /// Zero-based index of the call that should fail.
    pub fail_at: Option<usize>,
    /// Rows returned by `fetch_count`, keyed by statement text. Missing keys
    /// behave like an empty result set.
    pub counts: HashMap<String, HashMap<String, i64>>,
}

impl RecordingExecutor {
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, statement: &str, column: &str, value: i64) -> Self {
        self.counts
            .entry(statement.to_string())
            .or_default()
            .insert(column.to_string(), value);
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    fn record(&self, statement: &Statement) -> GraphResult<()> {
        let mut executed = self.executed.lock().unwrap();
        let index = executed.len();
        executed.push(statement.text.clone());
        if self.fail_at == Some(index) {
            return Err(GraphError::Query {
                statement: statement.text.clone(),
                message: "injected failure".into(),
            });
        }
        Ok(())
    }
}

impl QueryExecutor for RecordingExecutor {
    async fn run(&self, statement: &Statement) -> GraphResult<()> {
        self.record(statement)
    }

    async fn fetch_count(&self, statement: &Statement, column: &str) -> GraphResult<i64> {
        self.record(statement)?;
        let row = self
            .counts
            .get(&statement.text)
            .ok_or_else(|| GraphError::EmptyResult {
                statement: statement.text.clone(),
            })?;
        row.get(column).copied().ok_or_else(|| GraphError::Decode {
            column: column.to_string(),
            message: "no such column".into(),
        })
    }
}
