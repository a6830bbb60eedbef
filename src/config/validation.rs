//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Check the locale settings can produce a usable default
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GateConfig;
use crate::locale::LocaleTag;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("default_locale must not be empty")]
    EmptyDefaultLocale,

    #[error("default_locale `{0}` is not in available_locales")]
    DefaultLocaleNotServed(String),

    #[error("invalid listener bind_address `{0}`")]
    InvalidBindAddress(String),

    #[error("invalid upstream address `{0}`")]
    InvalidUpstream(String),

    #[error("excluded prefix `{0}` must start with `/`")]
    InvalidExcludedPrefix(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("invalid metrics_address `{0}`")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match LocaleTag::new(&config.locales.default_locale) {
        None => errors.push(ValidationError::EmptyDefaultLocale),
        // An unserved default is never accepted by the cookie or path checks,
        // so every request would redirect again.
        Some(default) if !config.locale_set().contains(default.as_str()) => {
            errors.push(ValidationError::DefaultLocaleNotServed(
                config.locales.default_locale.clone(),
            ));
        }
        Some(_) => {}
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(config.listener.bind_address.clone()));
    }

    if !is_host_port(&config.upstream.address) {
        errors.push(ValidationError::InvalidUpstream(config.upstream.address.clone()));
    }

    for prefix in &config.gate.excluded_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::InvalidExcludedPrefix(prefix.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upstreams may be named hosts, so only the `host:port` shape is checked.
fn is_host_port(address: &str) -> bool {
    match address.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GateConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GateConfig::default();
        config.locales.default_locale = "  ".into();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.address = "site-server".into();
        config.gate.excluded_prefixes.push("api".into());
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyDefaultLocale,
                ValidationError::InvalidBindAddress("not-an-address".into()),
                ValidationError::InvalidUpstream("site-server".into()),
                ValidationError::InvalidExcludedPrefix("api".into()),
                ValidationError::ZeroRequestTimeout,
            ]
        );
    }

    #[test]
    fn test_default_locale_must_be_served() {
        let mut config = GateConfig::default();
        config.locales.multi_locale_enabled = true;
        config.locales.available_locales = vec!["de".into(), "fr".into()];
        config.locales.default_locale = "en".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::DefaultLocaleNotServed("en".into())]
        );

        config.locales.default_locale = "DE".into();
        assert!(validate_config(&config).is_ok());

        config.locales.multi_locale_enabled = false;
        config.locales.default_locale = "nl".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_named_upstream_host() {
        let mut config = GateConfig::default();
        config.upstream.address = "frontend.internal:3000".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = GateConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidMetricsAddress("nope".into())]
        );
    }
}
