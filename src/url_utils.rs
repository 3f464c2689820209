//! URL utilities for media source resolution.
//!
//! Attribute values arrive in every state of disrepair: relative paths,
//! surrounding whitespace, inline `data:` payloads, or nothing parsable at
//! all. These helpers turn them into the string a record will carry, without
//! ever raising an error - an unusable value is simply "absent".

use url::Url;

/// Parse a string as an absolute http(s) URL.
///
/// Returns `None` for relative references, other schemes, and anything the
/// URL parser rejects.
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }
    let url = Url::parse(s).ok()?;
    url.host().is_some().then_some(url)
}

/// Check whether a source is an inline (embedded/base64) payload rather than
/// a fetchable resource.
#[must_use]
pub fn is_inline_data(s: &str) -> bool {
    s.trim_start().starts_with("data:")
}

/// Resolve a raw attribute value into the source string a record carries.
///
/// Absolute URLs and special schemes (`data:`, `javascript:`, `mailto:`,
/// `tel:`) pass through unchanged. Relative references are joined against
/// `base` when one is available; otherwise the value is kept as written.
/// Empty values resolve to `None`.
#[must_use]
pub fn resolve_source(raw: &str, base: Option<&Url>) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("data:")
        || raw.starts_with("javascript:")
        || raw.starts_with("mailto:")
        || raw.starts_with("tel:")
    {
        return Some(raw.to_string());
    }

    if parse_absolute(raw).is_some() {
        return Some(raw.to_string());
    }

    match base {
        Some(base) => match base.join(raw) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(_) => Some(raw.to_string()),
        },
        None => Some(raw.to_string()),
    }
}
