//! Locale tag normalization.
//!
//! # Responsibilities
//! - Canonicalize tag strings (lowercase, `-` separator)
//! - Provide the primary-subtag fallback used by every matching stage
//! - Hold the ordered set of locales the site can serve
//!
//! # Design Decisions
//! - Normalization never fails; garbage simply lowercases to itself
//! - Underscores are separator synonyms, so `pt_BR` == `pt-br`

use std::fmt;

/// Normalize a raw tag: underscores become hyphens, then lowercase.
///
/// Every underscore is replaced, not only the first, so that normalizing
/// twice gives the same result. Absent input stays absent.
pub fn normalize(tag: Option<&str>) -> Option<String> {
    tag.map(|t| t.replace('_', "-").to_lowercase())
}

/// Portion of a tag before the first `-` (`pt-br` → `pt`).
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// A normalized, non-empty locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Normalize `raw` into a tag. Returns `None` when nothing usable remains.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize(Some(raw.trim()))?;
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Fallback tag that is always servable as a last resort.
    pub fn fallback() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn primary(&self) -> &str {
        primary_subtag(&self.0)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, duplicate-free set of locales the site serves.
///
/// Built once from configuration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    tags: Vec<LocaleTag>,
}

impl LocaleSet {
    /// Build a set from raw tags, dropping empties and duplicates while keeping order.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<LocaleTag> = Vec::new();
        for tag in raw.into_iter().filter_map(|s| LocaleTag::new(s.as_ref())) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self { tags }
    }

    /// Derive the servable set from the multi-locale switch.
    ///
    /// With multi-locale off, or a list that yields nothing, only the
    /// default locale is served.
    pub fn from_settings<S: AsRef<str>>(
        multi_locale_enabled: bool,
        available: &[S],
        default_locale: &str,
    ) -> Self {
        if multi_locale_enabled {
            let set = Self::new(available);
            if !set.is_empty() {
                return set;
            }
        }
        let default = LocaleTag::new(default_locale).unwrap_or_else(LocaleTag::fallback);
        Self { tags: vec![default] }
    }

    /// Exact lookup of an already-normalized tag string.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == tag)
    }

    /// Return the set's own tag for `tag`, if served.
    pub fn get(&self, tag: &str) -> Option<&LocaleTag> {
        self.tags.iter().find(|t| t.as_str() == tag)
    }

    /// Exact match first, then the primary subtag.
    pub fn match_with_primary(&self, tag: &str) -> Option<&LocaleTag> {
        self.get(tag).or_else(|| self.get(primary_subtag(tag)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleTag> {
        self.tags.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for LocaleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
