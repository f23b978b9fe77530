//! Aggregate counts.

use serde::Serialize;

use crate::graph::{GraphResult, QueryExecutor, Statement};

pub const COUNT_NODES: &str = "MATCH (n) RETURN count(n) AS nodes;";
pub const COUNT_EDGES: &str = "MATCH ()-[]->() RETURN count(*) AS edges;";

/// Node and edge totals for the whole graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: i64,
    pub edges: i64,
}

pub async fn count_all_nodes<E: QueryExecutor>(executor: &E) -> GraphResult<i64> {
    executor.fetch_count(&Statement::new(COUNT_NODES), "nodes").await
}

pub async fn count_all_edges<E: QueryExecutor>(executor: &E) -> GraphResult<i64> {
    executor.fetch_count(&Statement::new(COUNT_EDGES), "edges").await
}

/// Count nodes, then edges, logging each total.
pub async fn collect<E: QueryExecutor>(executor: &E) -> GraphResult<GraphStats> {
    let nodes = count_all_nodes(executor).await?;
    tracing::info!(nodes, "Total nodes in the graph");

    let edges = count_all_edges(executor).await?;
    tracing::info!(edges, "Total edges in the graph");

    Ok(GraphStats { nodes, edges })
}
