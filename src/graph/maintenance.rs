//! Destructive housekeeping.

use crate::graph::{GraphResult, QueryExecutor, Statement};

pub const DELETE_EVERYTHING: &str = "MATCH (n) DETACH DELETE n;";

/// Remove every node and, with them, every relationship.
pub async fn delete_everything<E: QueryExecutor>(executor: &E) -> GraphResult<()> {
    executor.run(&Statement::new(DELETE_EVERYTHING)).await?;
    tracing::warn!("Deleted all nodes and relationships");
    Ok(())
}
