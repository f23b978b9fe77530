//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides (main.rs)
//!     → SeederConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the seeder runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ConnectionConfig;
pub use schema::ObservabilityConfig;
pub use schema::ReadinessConfig;
pub use schema::SeederConfig;
