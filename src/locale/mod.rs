//! Locale negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! raw signals (Accept-Language, country, default)
//!     → tag.rs (normalize, servable LocaleSet)
//!     → accept_language.rs (ordered preferences)
//!     → country.rs (country → preferred tag)
//!     → resolver.rs (first stage that yields a served tag wins)
//!     → Resolution { locale, source }
//! ```
//!
//! # Design Decisions
//! - Pure functions only: no I/O, no shared mutable state
//! - Every failure degrades to the next stage, never to an error
//! - Exact tag first, primary subtag second, in every stage

pub mod accept_language;
pub mod country;
pub mod resolver;
pub mod tag;

pub use resolver::{resolve, Resolution, ResolutionContext, ResolutionSource};
pub use tag::{normalize, LocaleSet, LocaleTag};
