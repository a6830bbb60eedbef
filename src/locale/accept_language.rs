//! `Accept-Language` header parsing.
//!
//! Turns a raw header value into tags ordered by preference. Parsing is
//! total: a bad segment degrades to quality 1.0 and never drops the rest
//! of the list.

use std::cmp::Ordering;

use crate::locale::tag::normalize;

/// A single weighted entry from the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    /// Normalized language tag.
    pub tag: String,
    /// Quality in `(0, 1]`.
    pub quality: f32,
}

/// Parse the header into normalized tags, most preferred first.
pub fn parse(header: &str) -> Vec<String> {
    parse_weighted(header).into_iter().map(|p| p.tag).collect()
}

/// Parse the header into weighted preferences, most preferred first.
///
/// Ties keep their original header order.
pub fn parse_weighted(header: &str) -> Vec<Preference> {
    let mut prefs: Vec<Preference> = header
        .split(',')
        .filter_map(|segment| {
            let mut parts = segment.split(';');
            let tag = normalize(parts.next().map(str::trim))?;
            if tag.is_empty() {
                return None;
            }
            Some(Preference {
                tag,
                quality: quality(parts),
            })
        })
        .collect();

    // Stable sort so equal weights stay in header order.
    prefs.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));
    prefs
}

/// Extract the `q` parameter, defaulting to 1.0 when absent or unusable.
fn quality<'a>(params: impl Iterator<Item = &'a str>) -> f32 {
    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if key.trim().eq_ignore_ascii_case("q") {
            return match value.trim().parse::<f32>() {
                Ok(q) if q > 0.0 && q <= 1.0 => q,
                _ => 1.0,
            };
        }
    }
    1.0
}
