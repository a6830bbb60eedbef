//! Locale Gate Middleware.
//! Sends unlocalized requests to a locale-prefixed URL.
//!
//! A request passes through untouched when it is out of scope, carries a
//! served locale cookie, or already has a served locale path prefix. Anything
//! else is resolved and redirected with the choice persisted in a cookie.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::config::GateConfig;
use crate::http::request::request_id;
use crate::http::response::{locale_redirect, redirect_target};
use crate::http::signals::{self, LOCALE_COOKIE};
use crate::locale::{normalize, resolve, LocaleSet, Resolution, ResolutionContext};
use crate::observability::metrics;
use crate::routing::GateScope;

/// Why a request was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassReason {
    OutOfScope,
    Cookie,
    PathPrefix,
}

impl PassReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassReason::OutOfScope => "out_of_scope",
            PassReason::Cookie => "cookie",
            PassReason::PathPrefix => "path",
        }
    }
}

/// What the gate does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    PassThrough(PassReason),
    Redirect {
        location: String,
        resolution: Resolution,
    },
}

/// Immutable gate state, built once from config and shared by every request.
#[derive(Debug)]
pub struct LocaleGate {
    locales: LocaleSet,
    default_locale: String,
    scope: GateScope,
}

impl LocaleGate {
    pub fn new(locales: LocaleSet, default_locale: impl Into<String>, scope: GateScope) -> Self {
        Self {
            locales,
            default_locale: default_locale.into(),
            scope,
        }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(
            config.locale_set(),
            config.locales.default_locale.clone(),
            GateScope::from_config(&config.gate),
        )
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Decide pass-through or redirect. Never fails.
    pub fn decide(&self, req: &Request<Body>) -> GateDecision {
        if !self.scope.applies(req) {
            return GateDecision::PassThrough(PassReason::OutOfScope);
        }

        // A served cookie wins outright, even over a different path prefix.
        let cookie = normalize(signals::cookie_value(req.headers(), LOCALE_COOKIE));
        if cookie.is_some_and(|c| self.locales.contains(&c)) {
            return GateDecision::PassThrough(PassReason::Cookie);
        }

        if self.has_locale_prefix(req.uri().path()) {
            return GateDecision::PassThrough(PassReason::PathPrefix);
        }

        let resolution = resolve(&ResolutionContext {
            available: &self.locales,
            accept_language: signals::accept_language(req),
            country: signals::country_code(req),
            default_locale: &self.default_locale,
        });

        GateDecision::Redirect {
            location: redirect_target(req, &resolution.locale),
            resolution,
        }
    }

    /// `/<tag>` or `/<tag>/...` for a served tag.
    fn has_locale_prefix(&self, path: &str) -> bool {
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };
        self.locales.iter().any(|tag| {
            rest.strip_prefix(tag.as_str())
                .is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
        })
    }
}

pub async fn locale_gate_middleware(
    State(gate): State<Arc<LocaleGate>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match gate.decide(&req) {
        GateDecision::PassThrough(reason) => {
            metrics::record_decision("pass", reason.as_str());
            next.run(req).await
        }
        GateDecision::Redirect {
            location,
            resolution,
        } => {
            tracing::debug!(
                request_id = %request_id(&req),
                path = %req.uri().path(),
                locale = %resolution.locale,
                source = %resolution.source,
                location = %location,
                "Redirecting to locale"
            );
            metrics::record_decision("redirect", resolution.source.as_str());
            locale_redirect(location, &resolution.locale)
        }
    }
}
