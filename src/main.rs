//! graph-seeder
//!
//! Waits for a Bolt-speaking graph database (Memgraph by default) to accept
//! queries, loads a small developer/technology graph and reports totals.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI flags ─┐
//!   TOML file ─┴─▶ config ──▶ lifecycle::startup
//!                                  │
//!                                  ▼
//!                  readiness::ReadinessWaiter ◀── lifecycle::signals (Ctrl-C / SIGTERM)
//!                    │ TcpProbe, then GraphClient probe
//!                    ▼
//!                  graph::GraphClient (neo4rs)
//!                    ├─▶ graph::seed
//!                    ├─▶ graph::stats
//!                    └─▶ graph::maintenance
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use graph_seeder::config::{load_config, validation::validate_config, SeederConfig};
use graph_seeder::graph::{maintenance, seed, stats, GraphStats};
use graph_seeder::lifecycle::{signals, startup, Shutdown};
use graph_seeder::observability::logging;

#[derive(Parser, Debug)]
#[command(name = "graph-seeder")]
#[command(author, version, about = "Seed a Bolt graph database once it is reachable", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "GRAPH_SEEDER_CONFIG")]
    config: Option<PathBuf>,

    /// Bolt URI, e.g. bolt://localhost:7687
    #[arg(long, env = "GRAPH_SEEDER_URI")]
    uri: Option<String>,

    #[arg(long, env = "GRAPH_SEEDER_USER")]
    user: Option<String>,

    #[arg(long, env = "GRAPH_SEEDER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long, env = "GRAPH_SEEDER_DATABASE")]
    database: Option<String>,

    /// Probes allowed per readiness wait
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Delay between probes in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Print totals as JSON on stdout
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Wait, seed, then count (default)
    Run,
    /// Only wait for the database to become ready
    Wait,
    /// Wait, then seed without counting
    Seed,
    /// Wait, then count nodes and edges
    Count,
    /// Wait, then delete every node and relationship
    Wipe,
}

impl Cli {
    fn resolve_config(&self) -> Result<SeederConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SeederConfig::default(),
        };

        if let Some(uri) = &self.uri {
            config.connection.uri = uri.clone();
        }
        if let Some(user) = &self.user {
            config.connection.user = user.clone();
        }
        if let Some(password) = &self.password {
            config.connection.password = password.clone();
        }
        if let Some(database) = &self.database {
            config.connection.database = database.clone();
        }
        if let Some(max_attempts) = self.max_attempts {
            config.readiness.max_attempts = max_attempts;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.readiness.interval_ms = interval_ms;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        validate_config(&config).map_err(|errors| {
            let joined = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
            format!("invalid configuration: {}", joined.join(", "))
        })?;

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("graph-seeder: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);
    tracing::info!(
        uri = %config.connection.uri,
        database = %config.connection.database,
        max_attempts = config.readiness.max_attempts,
        interval_ms = config.readiness.interval_ms,
        "graph-seeder v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let shutdown = Shutdown::new();
    let _signals = signals::listen(shutdown.clone());

    let command = cli.command.unwrap_or(Commands::Run);
    let outcome = shutdown
        .until_triggered(execute(command, &config, &shutdown))
        .await
        .map_err(startup::StartupError::from)
        .and_then(|result| result);

    match outcome {
        Ok(Some(totals)) => {
            if cli.json {
                match serde_json::to_string(&totals) {
                    Ok(line) => println!("{line}"),
                    Err(e) => {
                        tracing::error!(error = %e, "Could not serialize totals");
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(command = ?command, error = %e, "graph-seeder failed");
            ExitCode::FAILURE
        }
    }
}

async fn execute(
    command: Commands,
    config: &SeederConfig,
    shutdown: &Shutdown,
) -> Result<Option<GraphStats>, startup::StartupError> {
    if command == Commands::Run {
        return startup::run(config, shutdown).await.map(Some);
    }

    let client = startup::connect_when_ready(config, shutdown).await?;
    match command {
        Commands::Run | Commands::Wait => Ok(None),
        Commands::Seed => {
            seed::insert_data(&client).await?;
            Ok(None)
        }
        Commands::Count => Ok(Some(stats::collect(&client).await?)),
        Commands::Wipe => {
            maintenance::delete_everything(&client).await?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "graph-seeder",
            "--uri",
            "bolt://db:7687",
            "--max-attempts",
            "10",
            "--interval-ms",
            "500",
            "count",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(cli.command, Some(Commands::Count));
        assert_eq!(config.connection.uri, "bolt://db:7687");
        assert_eq!(config.readiness.max_attempts, 10);
        assert_eq!(config.readiness.interval_ms, 500);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::parse_from(["graph-seeder", "--max-attempts", "0"]);
        let err = cli.resolve_config().unwrap_err();
        assert!(err.to_string().contains("readiness.max_attempts"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
