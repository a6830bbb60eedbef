//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GateConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_ENABLE_MULTI_LANG: &str = "NEXT_PUBLIC_ENABLE_MULTI_LANG";
pub const ENV_AVAILABLE_LANGUAGES: &str = "NEXT_PUBLIC_AVAILABLE_LANGUAGES";
pub const ENV_DEFAULT_LANGUAGE: &str = "NEXT_PUBLIC_DEFAULT_LANGUAGE";
pub const ENV_PORT: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load the optional file, apply process environment overrides, then validate.
pub fn load(path: Option<&Path>) -> Result<GateConfig, ConfigError> {
    load_with_env(path, |key| std::env::var(key).ok())
}

fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<GateConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: GateConfig = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => GateConfig::default(),
    };

    apply_env_overrides(&mut config, lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply deployment environment variables on top of file settings.
///
/// Empty values are ignored, so an unset-but-exported variable keeps the
/// file value.
pub fn apply_env_overrides<F>(config: &mut GateConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(flag) = var(ENV_ENABLE_MULTI_LANG) {
        config.locales.multi_locale_enabled = flag.trim() == "true";
    }

    if let Some(list) = var(ENV_AVAILABLE_LANGUAGES) {
        config.locales.available_locales = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    if let Some(default_locale) = var(ENV_DEFAULT_LANGUAGE) {
        config.locales.default_locale = default_locale.trim().to_string();
    }

    if let Some(port) = var(ENV_PORT) {
        let host = config
            .listener
            .bind_address
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        config.listener.bind_address = format!("{}:{}", host, port.trim());
    }
}
