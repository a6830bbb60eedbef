//! Request-time locale gate for an HTTP edge.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod routing;

pub use config::schema::GateConfig;
pub use http::{HttpServer, LocaleGate};
pub use lifecycle::Shutdown;
pub use locale::{resolve, LocaleSet, LocaleTag, Resolution, ResolutionContext};
