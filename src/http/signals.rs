//! Locale signals carried by an incoming request.
//!
//! # Responsibilities
//! - Read the persisted locale cookie
//! - Read the `Accept-Language` header
//! - Read the client country from the platform geo extension or edge headers
//!
//! # Design Decisions
//! - Country sources are an explicit priority list; first non-empty wins
//! - Unreadable (non-UTF-8) header values count as absent

use axum::http::{header, HeaderMap, Request};

/// Cookie holding the persisted locale choice.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Country code attached by the hosting platform, if it provides one.
///
/// An upstream layer inserts this into request extensions; it outranks
/// every header source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoCountry(pub String);

/// One place a country code can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountrySource {
    /// `GeoCountry` request extension.
    Platform,
    /// A proxy/edge header.
    Header(&'static str),
}

/// Country sources in priority order.
pub const COUNTRY_SOURCES: &[CountrySource] = &[
    CountrySource::Platform,
    CountrySource::Header("x-vercel-ip-country"),
    CountrySource::Header("cf-ipcountry"),
    CountrySource::Header("x-country-code"),
    CountrySource::Header("x-geo-country"),
];

impl CountrySource {
    /// Read this source, treating empty values as absent.
    pub fn read<'a, B>(&self, req: &'a Request<B>) -> Option<&'a str> {
        let value = match self {
            CountrySource::Platform => req.extensions().get::<GeoCountry>().map(|geo| geo.0.as_str()),
            CountrySource::Header(name) => header_str(req.headers(), name),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }
}

/// First country code found across `COUNTRY_SOURCES`.
pub fn country_code<B>(req: &Request<B>) -> Option<&str> {
    COUNTRY_SOURCES.iter().find_map(|source| source.read(req))
}

/// Raw `Accept-Language` value.
pub fn accept_language<B>(req: &Request<B>) -> Option<&str> {
    header_str(req.headers(), header::ACCEPT_LANGUAGE.as_str())
}

/// Value of the named cookie across every `Cookie` header.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|h| h.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key.trim() == name {
                Some(value.trim().trim_matches('"'))
            } else {
                None
            }
        })
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
