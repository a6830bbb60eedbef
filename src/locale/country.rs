//! Country → locale preference table.
//!
//! Regional choices here are product policy (e.g. every Spanish-speaking
//! Latin American country maps to `es-419`). Mapped tags are only hints;
//! they are checked against the servable set before use.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::locale::tag::{normalize, primary_subtag, LocaleSet, LocaleTag};

static COUNTRY_LOCALES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("DE", "de"),
        ("AT", "de"),
        ("CH", "de"),
        ("NO", "nb"),
        ("DK", "da"),
        ("SE", "sv-se"),
        ("FI", "fi"),
        ("NL", "nl"),
        ("BE", "nl"),
        ("FR", "fr"),
        ("ES", "es-es"),
        ("MX", "es-419"),
        ("AR", "es-419"),
        ("CO", "es-419"),
        ("BR", "pt-br"),
        ("PT", "pt"),
        ("IT", "it"),
        ("GB", "en"),
        ("IE", "en"),
        ("US", "en"),
        ("CA", "en"),
        ("AU", "en"),
        ("NZ", "en"),
        ("IN", "hi"),
        ("PK", "ur-pk"),
        ("SA", "ar"),
        ("AE", "ar"),
        ("EG", "ar"),
        ("TR", "tr"),
        ("RU", "ru"),
        ("UA", "uk"),
        ("RO", "ro"),
        ("BG", "bg"),
        ("GR", "el"),
        ("PL", "pl"),
        ("CZ", "cs"),
        ("SK", "sk"),
        ("HU", "hu"),
        ("ID", "id"),
        ("JP", "ja"),
        ("KR", "ko"),
        ("CN", "zh-cn"),
        ("TW", "zh-hant"),
        ("HK", "zh-hant"),
        ("VN", "vi"),
        ("IR", "fa"),
        ("IL", "he"),
    ])
});

/// Raw preferred tag for a country code, before any availability check.
pub fn preferred_locale(country: &str) -> Option<&'static str> {
    COUNTRY_LOCALES
        .get(country.trim().to_uppercase().as_str())
        .copied()
}

/// Pick a servable locale for `country`: the mapped tag if served, else its
/// primary subtag if served, else nothing.
pub fn map_country(available: &LocaleSet, country: Option<&str>) -> Option<LocaleTag> {
    let desired = normalize(preferred_locale(country?))?;

    if let Some(tag) = available.get(&desired) {
        return Some(tag.clone());
    }
    available.get(primary_subtag(&desired)).cloned()
}
