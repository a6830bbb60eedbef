//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gate and server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (decision counters, request latency)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line about a request
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
