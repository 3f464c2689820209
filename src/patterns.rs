//! Compiled regex patterns, marker tables and CSS selectors for media discovery.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! The marker tables preserve the exact substrings and matching policy of the
//! classification heuristics; behavior compatibility takes precedence over
//! accuracy here.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Media URL Patterns
// =============================================================================

/// Matches strings ending in a playable-media file extension.
pub static MEDIA_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(m3u8|mp4|webm|flv|ts)$").expect("MEDIA_EXTENSION regex")
});

/// Finds literal media URLs embedded in script text.
///
/// This is best-effort pattern matching over raw text, not a parse of script
/// semantics: URL-shaped substrings that are never fetched will still match.
pub static SCRIPT_MEDIA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s'"]+\.(?:m3u8|mp4|webm|flv|ts)"#).expect("SCRIPT_MEDIA_URL regex")
});

/// Extracts a video identifier from video-sharing URLs
/// (`watch?v=`, `/embed/`, and short-host forms).
pub static WATCH_VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/embed/|youtu\.be/)([A-Za-z0-9_-]+)").expect("WATCH_VIDEO_ID regex")
});

// =============================================================================
// Classification Marker Tables
// =============================================================================

/// Hostname substrings that mark a frame as video-serving.
///
/// Case-sensitive substring match against the frame's hostname. The list is
/// inherently approximate (it both over- and under-classifies) and is kept
/// as-is.
pub const VIDEO_HOST_MARKERS: [&str; 5] = ["play-cdn", "vip", "video", "cdn", "stream"];

/// Frame query parameters probed for an inner media URL, in precedence order.
pub const INNER_URL_PARAMS: [&str; 3] = ["url", "video", "src"];

/// Playlist manifest marker for the catch-all source-attribute pass.
pub const M3U8_MARKER: &str = ".m3u8";

// =============================================================================
// CSS Selectors
// =============================================================================

/// Selector for image elements carrying a source.
pub const IMAGE_SELECTOR: &str = "img[src]";

/// Selector for embedded frames carrying a source.
pub const FRAME_SELECTOR: &str = "iframe[src]";

/// Selector for nested source children of playable elements.
pub const NESTED_SOURCE_SELECTOR: &str = "source[src]";

/// Selector for any element carrying a source attribute.
pub const ANY_SOURCE_SELECTOR: &str = "[src]";

/// Selector for script-bearing elements.
pub const SCRIPT_SELECTOR: &str = "script";

/// Selector for hyperlinks with a target.
pub const ANCHOR_SELECTOR: &str = "a[href]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_extension_matches_known_endings() {
        assert!(MEDIA_EXTENSION.is_match("https://cdn.example.com/v.m3u8"));
        assert!(MEDIA_EXTENSION.is_match("https://cdn.example.com/v.MP4"));
        assert!(MEDIA_EXTENSION.is_match("/segments/000.ts"));
        assert!(!MEDIA_EXTENSION.is_match("https://cdn.example.com/v.mp4?t=1"));
        assert!(!MEDIA_EXTENSION.is_match("https://example.com/page.html"));
    }

    #[test]
    fn script_media_url_finds_urls_inside_quotes() {
        let text = r#"var cfg = {"file": "https://cdn.example.com/live/index.m3u8", autoplay: true};"#;
        let found: Vec<&str> = SCRIPT_MEDIA_URL.find_iter(text).map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["https://cdn.example.com/live/index.m3u8"]);
    }

    #[test]
    fn script_media_url_stops_at_quote_boundaries() {
        let text = r#"a("https://a.example/x.mp4");b('https://b.example/y.webm')"#;
        let found: Vec<&str> = SCRIPT_MEDIA_URL.find_iter(text).map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["https://a.example/x.mp4", "https://b.example/y.webm"]);
    }

    #[test]
    fn watch_video_id_covers_all_url_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
        ] {
            let id = WATCH_VIDEO_ID
                .captures(url)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str());
            assert_eq!(id, Some("dQw4w9WgXcQ"), "no id in {url}");
        }
    }

    #[test]
    fn host_markers_are_case_sensitive() {
        assert!(VIDEO_HOST_MARKERS.iter().any(|m| "play-cdn7.example".contains(m)));
        assert!(!VIDEO_HOST_MARKERS.iter().any(|m| "VIDEO.example".contains(m)));
    }
}
