//! Fixed demo dataset: developers and the technologies they love.
//!
//! Statements run in order (indexes, developers, technologies,
//! relationships) and stop at the first failure. Seeding an empty database
//! yields 8 nodes and 6 edges.

use crate::graph::{GraphResult, QueryExecutor, Statement};

pub const INDEXES: &[&str] = &[
    "CREATE INDEX ON :Developer(id);",
    "CREATE INDEX ON :Technology(id);",
    "CREATE INDEX ON :Developer(name);",
    "CREATE INDEX ON :Technology(name);",
];

pub const DEVELOPER_NODES: &[&str] = &[
    "CREATE (n:Developer {id: 1, name:'Andy'});",
    "CREATE (n:Developer {id: 2, name:'John'});",
    "CREATE (n:Developer {id: 3, name:'Michael'});",
];

pub const TECHNOLOGY_NODES: &[&str] = &[
    "CREATE (n:Technology {id: 1, name:'Memgraph', description: 'Fastest graph DB in the world!', createdAt: Date()})",
    "CREATE (n:Technology {id: 2, name:'Go', description: 'Go programming language ', createdAt: Date()})",
    "CREATE (n:Technology {id: 3, name:'Docker', description: 'Docker containerization engine', createdAt: Date()})",
    "CREATE (n:Technology {id: 4, name:'Kubernetes', description: 'Kubernetes container orchestration engine', createdAt: Date()})",
    "CREATE (n:Technology {id: 5, name:'Python', description: 'Python programming language', createdAt: Date()})",
];

pub const RELATIONSHIPS: &[&str] = &[
    "MATCH (a:Developer {id: 1}),(b:Technology {id: 1}) CREATE (a)-[r:LOVES]->(b);",
    "MATCH (a:Developer {id: 2}),(b:Technology {id: 3}) CREATE (a)-[r:LOVES]->(b);",
    "MATCH (a:Developer {id: 3}),(b:Technology {id: 1}) CREATE (a)-[r:LOVES]->(b);",
    "MATCH (a:Developer {id: 1}),(b:Technology {id: 5}) CREATE (a)-[r:LOVES]->(b);",
    "MATCH (a:Developer {id: 2}),(b:Technology {id: 2}) CREATE (a)-[r:LOVES]->(b);",
    "MATCH (a:Developer {id: 3}),(b:Technology {id: 4}) CREATE (a)-[r:LOVES]->(b);",
];

/// Nodes created by [`insert_data`] on an empty database.
pub const SEEDED_NODES: i64 = (DEVELOPER_NODES.len() + TECHNOLOGY_NODES.len()) as i64;

/// Edges created by [`insert_data`] on an empty database.
pub const SEEDED_EDGES: i64 = RELATIONSHIPS.len() as i64;

/// Every seed statement in execution order.
pub fn statements() -> impl Iterator<Item = &'static str> {
    INDEXES
        .iter()
        .chain(DEVELOPER_NODES)
        .chain(TECHNOLOGY_NODES)
        .chain(RELATIONSHIPS)
        .copied()
}

/// Load the dataset. Not idempotent: running it twice duplicates nodes.
pub async fn insert_data<E: QueryExecutor>(executor: &E) -> GraphResult<usize> {
    let mut executed = 0;
    for text in statements() {
        executor.run(&Statement::new(text)).await?;
        executed += 1;
    }

    tracing::info!(statements = executed, "All data inserted");
    Ok(executed)
}
