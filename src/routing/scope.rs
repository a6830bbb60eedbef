//! Gate scope: which requests the locale gate inspects.
//!
//! # Design Decisions
//! - Built once from config, immutable afterwards
//! - Excluded prefixes are framework assets, API and image routes; these
//!   are never locale-prefixed

use axum::body::Body;
use axum::http::Request;

use crate::config::GateScopeConfig;
use crate::routing::matcher::{AnyMatcher, Matcher, PathPrefixMatcher};

/// Compiled inclusion filter for the gate.
#[derive(Debug, Default)]
pub struct GateScope {
    excluded: AnyMatcher,
}

impl GateScope {
    pub fn from_config(config: &GateScopeConfig) -> Self {
        let matchers = config
            .excluded_prefixes
            .iter()
            .map(|prefix| Box::new(PathPrefixMatcher::new(prefix.clone())) as Box<dyn Matcher>)
            .collect();
        Self {
            excluded: AnyMatcher::new(matchers),
        }
    }

    /// Returns true if the gate should inspect this request.
    pub fn applies(&self, req: &Request<Body>) -> bool {
        !self.excluded.matches(req)
    }
}
