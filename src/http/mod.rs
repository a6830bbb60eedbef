//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add request ID)
//!     → middleware/locale_gate.rs (scope, cookie, path prefix, resolve)
//!         ├─ redirect: response.rs (307 + Set-Cookie) → client
//!         └─ pass: server.rs forwards to the upstream site server
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod signals;

pub use middleware::{locale_gate_middleware, GateDecision, LocaleGate};
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
pub use signals::{GeoCountry, LOCALE_COOKIE};
