//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → scope.rs (is the gate in scope for this path?)
//!     → matcher.rs (evaluate excluded prefixes)
//!     → in scope: locale gate runs; otherwise pass straight through
//!
//! Scope Compilation (at startup):
//!     GateScopeConfig.excluded_prefixes
//!     → Compile prefix matchers
//!     → Freeze as immutable GateScope
//! ```
//!
//! # Design Decisions
//! - Scope compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same path always gets the same answer

pub mod matcher;
pub mod scope;

pub use scope::GateScope;
