//! Character encoding detection and transcoding.
//!
//! Documents fetched as raw bytes declare their charset (if at all) in a
//! `<meta charset>` or `<meta http-equiv="Content-Type">` tag. This module
//! sniffs that declaration and transcodes to UTF-8 so the scanner only ever
//! sees valid strings. Undecodable bytes become replacement characters,
//! never errors.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches a charset declaration in either meta-tag form.
#[allow(clippy::expect_used)]
static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*charset\s*=\s*["']?([A-Za-z0-9_.:-]+)"#).expect("valid regex")
});

/// How far into the document to look for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Detect the character encoding declared by an HTML document.
///
/// Falls back to UTF-8 when no declaration is found or the declared label is
/// unknown to the WHATWG encoding registry.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_DECLARATION
        .captures(&head_str)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use media_sniffer::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detects_content_type_charset() {
        let html =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // The WHATWG registry maps ISO-8859-1 to windows-1252.
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn defaults_to_utf8_without_declaration() {
        assert_eq!(detect_encoding(b"<html><body>plain</body></html>"), UTF_8);
    }

    #[test]
    fn transcodes_legacy_bytes() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn invalid_bytes_become_replacement_characters() {
        let html = b"<html><body>ok \xFF\xFE still ok</body></html>";
        let decoded = transcode_to_utf8(html);
        assert!(decoded.contains("ok"));
        assert!(decoded.contains("still ok"));
    }
}
