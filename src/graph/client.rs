//! Bolt client backed by the `neo4rs` driver.

use neo4rs::{ConfigBuilder, Graph, Query};
use url::Url;

use crate::config::ConnectionConfig;
use crate::graph::{GraphError, GraphResult, ParamValue, QueryExecutor, Statement};
use crate::observability::metrics;
use crate::readiness::Probe;

const DEFAULT_BOLT_PORT: u16 = 7687;
const PING: &str = "RETURN 1 AS ok;";

/// Connection handle to a Bolt-speaking graph database.
///
/// Cloning is cheap; clones share the driver's connection pool.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
    uri: String,
    database: String,
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient")
            .field("uri", &self.uri)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl GraphClient {
    /// Create the driver. The pool connects lazily, so this succeeding does
    /// not mean the database is reachable; use the [`Probe`] impl for that.
    pub async fn connect(config: &ConnectionConfig) -> GraphResult<Self> {
        let connect_err = |e: neo4rs::Error| GraphError::Connect {
            uri: config.uri.clone(),
            message: e.to_string(),
        };

        let driver_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .build()
            .map_err(connect_err)?;

        let graph = Graph::connect(driver_config).await.map_err(connect_err)?;
        tracing::debug!(uri = %config.uri, database = %config.database, "Driver created");

        Ok(Self {
            graph,
            uri: config.uri.clone(),
            database: config.database.clone(),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

fn to_query(statement: &Statement) -> Query {
    statement
        .params
        .iter()
        .fold(neo4rs::query(&statement.text), |q, (key, value)| match value {
            ParamValue::Int(v) => q.param(key, *v),
            ParamValue::Text(v) => q.param(key, v.clone()),
        })
}

fn query_err(statement: &Statement, e: neo4rs::Error) -> GraphError {
    GraphError::Query {
        statement: statement.text.clone(),
        message: e.to_string(),
    }
}

/// Count a statement once its final outcome, decoding included, is known.
fn record_outcome<T>(result: GraphResult<T>) -> GraphResult<T> {
    metrics::record_statement(if result.is_ok() { "success" } else { "failure" });
    result
}

impl GraphClient {
    async fn count_row(&self, statement: &Statement, column: &str) -> GraphResult<i64> {
        let mut rows = self
            .graph
            .execute(to_query(statement))
            .await
            .map_err(|e| query_err(statement, e))?;

        let row = rows
            .next()
            .await
            .map_err(|e| query_err(statement, e))?
            .ok_or_else(|| GraphError::EmptyResult {
                statement: statement.text.clone(),
            })?;

        let count: i64 = row.get(column).map_err(|e| GraphError::Decode {
            column: column.to_string(),
            message: e.to_string(),
        })?;
        Ok(count)
    }
}

impl QueryExecutor for GraphClient {
    async fn run(&self, statement: &Statement) -> GraphResult<()> {
        tracing::trace!(statement = %statement, "Running statement");
        let result = self
            .graph
            .run(to_query(statement))
            .await
            .map_err(|e| query_err(statement, e));
        record_outcome(result)
    }

    async fn fetch_count(&self, statement: &Statement, column: &str) -> GraphResult<i64> {
        tracing::trace!(statement = %statement, column, "Fetching count");
        record_outcome(self.count_row(statement, column).await)
    }
}

impl Probe for GraphClient {
    type Error = GraphError;

    /// Full round-trip through the driver: handshake, auth and a trivial query.
    /// Counted by the readiness metrics only, not as a statement.
    async fn probe(&self) -> Result<(), GraphError> {
        self.graph
            .run(neo4rs::query(PING))
            .await
            .map_err(|e| GraphError::Query {
                statement: PING.to_string(),
                message: e.to_string(),
            })
    }
}

/// Extract `host:port` from a Bolt URI, defaulting the port to 7687.
pub fn bolt_address(uri: &str) -> GraphResult<String> {
    let url = Url::parse(uri).map_err(|e| GraphError::Config(format!("{uri}: {e}")))?;
    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| GraphError::Config(format!("{uri}: missing host")))?;
    let port = url.port().unwrap_or(DEFAULT_BOLT_PORT);
    Ok(format!("{host}:{port}"))
}
