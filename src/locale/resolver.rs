//! Locale negotiation.
//!
//! # Decision Order
//! ```text
//! country table  → served?  → done
//! Accept-Language (exact, then primary subtag) → served? → done
//! default locale (or "en")
//! ```
//!
//! The order is load-bearing: an available country mapping beats any
//! header preference. Resolution is pure and never fails.

use std::fmt;

use crate::locale::accept_language;
use crate::locale::country::map_country;
use crate::locale::tag::{LocaleSet, LocaleTag};

/// Request-scoped inputs to a resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub available: &'a LocaleSet,
    pub accept_language: Option<&'a str>,
    pub country: Option<&'a str>,
    pub default_locale: &'a str,
}

/// Which stage produced the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Country,
    AcceptLanguage,
    Default,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Country => "country",
            ResolutionSource::AcceptLanguage => "accept_language",
            ResolutionSource::Default => "default",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub locale: LocaleTag,
    pub source: ResolutionSource,
}

/// Choose the locale to serve. Always returns a tag.
pub fn resolve(ctx: &ResolutionContext<'_>) -> Resolution {
    if let Some(locale) = map_country(ctx.available, ctx.country) {
        return Resolution {
            locale,
            source: ResolutionSource::Country,
        };
    }

    let preferences = ctx.accept_language.map(accept_language::parse).unwrap_or_default();
    for tag in &preferences {
        if let Some(locale) = ctx.available.match_with_primary(tag) {
            return Resolution {
                locale: locale.clone(),
                source: ResolutionSource::AcceptLanguage,
            };
        }
    }

    Resolution {
        locale: LocaleTag::new(ctx.default_locale).unwrap_or_else(LocaleTag::fallback),
        source: ResolutionSource::Default,
    }
}
