//! Request middleware.

pub mod locale_gate;

pub use locale_gate::{locale_gate_middleware, GateDecision, LocaleGate, PassReason};
