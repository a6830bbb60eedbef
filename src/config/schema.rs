//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gate.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleSet;

/// Root configuration for the locale gate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Site server the gate fronts.
    pub upstream: UpstreamConfig,

    /// Servable locales and the default.
    pub locales: LocaleConfig,

    /// Which paths the gate applies to.
    pub gate: GateScopeConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GateConfig {
    /// Servable locale set derived from the locale settings.
    pub fn locale_set(&self) -> LocaleSet {
        LocaleSet::from_settings(
            self.locales.multi_locale_enabled,
            self.locales.available_locales.as_slice(),
            &self.locales.default_locale,
        )
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3003").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3003".to_string(),
        }
    }
}

/// Upstream site server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream address (e.g., "127.0.0.1:3000").
    pub address: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Locale settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Serve every locale in `available_locales` instead of only the default.
    pub multi_locale_enabled: bool,

    /// Locales served in multi-locale mode.
    pub available_locales: Vec<String>,

    /// Locale used when no signal resolves.
    pub default_locale: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            multi_locale_enabled: false,
            available_locales: vec!["en".to_string()],
            default_locale: "en".to_string(),
        }
    }
}

/// Gate scope configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GateScopeConfig {
    /// Path prefixes the gate never touches (framework assets, API, images).
    pub excluded_prefixes: Vec<String>,
}

impl Default for GateScopeConfig {
    fn default() -> Self {
        Self {
            excluded_prefixes: vec!["/_next".to_string(), "/api".to_string(), "/images".to_string()],
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
