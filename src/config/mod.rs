//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (NEXT_PUBLIC_* / PORT environment overrides)
//!     → validation.rs (semantic checks)
//!     → GateConfig (validated, immutable)
//!     → shared via Arc to the gate and server
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never changes at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::GateConfig;
pub use schema::{GateScopeConfig, ListenerConfig, LocaleConfig, LogFormat, ObservabilityConfig, UpstreamConfig};
