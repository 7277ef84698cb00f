//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → VanityConfig (validated, immutable)
//!     → mappings compiled into the MappingRouter
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::DocsConfig;
pub use schema::ListenerConfig;
pub use schema::LogFormat;
pub use schema::MappingConfig;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
pub use schema::VanityConfig;
