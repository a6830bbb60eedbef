//! Locale redirect responses.
//!
//! # Responsibilities
//! - Build the redirect target: original URL with `/<locale>` prepended
//! - Build the persisted-choice `Set-Cookie` value
//!
//! # Design Decisions
//! - 307 keeps the method and body of the original request
//! - Absolute `Location` when the host is known, relative otherwise
//! - Scheme taken from the URI, then `x-forwarded-proto`, then `http`

use axum::{
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::http::signals::LOCALE_COOKIE;
use crate::locale::LocaleTag;

/// One year.
pub const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// `Set-Cookie` value persisting the chosen locale.
pub fn locale_cookie(locale: &LocaleTag) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/",
        LOCALE_COOKIE, locale, COOKIE_MAX_AGE_SECS
    )
}

/// The request's URL with `/<locale>` prepended to its path.
pub fn redirect_target<B>(req: &Request<B>, locale: &LocaleTag) -> String {
    let path = format!("/{}{}", locale, req.uri().path());
    let query = req.uri().query();

    let absolute = host(req).and_then(|host| {
        let mut url = Url::parse(&format!("{}://{}", scheme(req), host)).ok()?;
        url.set_path(&path);
        url.set_query(query);
        url.set_fragment(None);
        Some(url.to_string())
    });

    absolute.unwrap_or_else(|| match query {
        Some(q) => format!("{}?{}", path, q),
        None => path,
    })
}

/// Temporary redirect carrying the locale cookie.
pub fn locale_redirect(location: String, locale: &LocaleTag) -> Response {
    (
        StatusCode::TEMPORARY_REDIRECT,
        [
            (header::LOCATION, location),
            (header::SET_COOKIE, locale_cookie(locale)),
        ],
    )
        .into_response()
}

fn host<B>(req: &Request<B>) -> Option<&str> {
    req.uri()
        .authority()
        .map(|a| a.as_str())
        .or_else(|| req.headers().get(header::HOST).and_then(|v| v.to_str().ok()))
        .filter(|h| !h.is_empty())
}

fn scheme<B>(req: &Request<B>) -> &'static str {
    let proto = req.uri().scheme_str().or_else(|| {
        req.headers()
            .get(X_FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
    });
    match proto {
        Some(p) if p.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}
