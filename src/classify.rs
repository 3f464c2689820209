//! Heuristic classification of embedded frames.
//!
//! Frames are the one candidate class whose kind cannot be read off the
//! element. Three rules apply in fixed precedence: an inner URL smuggled
//! through a query parameter, a recognizable video-sharing embed, and
//! finally demotion to "possibly media, unresolved". A frame URL that does
//! not parse skips the first two rules entirely - parse failure here is
//! "no result from this heuristic", never an error.

use url::Url;

use crate::patterns::{INNER_URL_PARAMS, MEDIA_EXTENSION, VIDEO_HOST_MARKERS, WATCH_VIDEO_ID};

/// Outcome of classifying one embedded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FrameClass {
    /// Resolved to a concrete video URL, which may differ from the frame URL
    /// (inner URL extraction, canonical watch-page links).
    Video(String),
    /// No concrete type could be inferred; report the frame itself.
    Suspect,
}

/// Classify an embedded frame by its resolved source URL.
pub(crate) fn classify_frame(frame_src: &str) -> FrameClass {
    let Some(frame) = crate::url_utils::parse_absolute(frame_src) else {
        return FrameClass::Suspect;
    };

    if let Some(inner) = inner_video_url(&frame) {
        return FrameClass::Video(inner);
    }

    if let Some(watch) = canonical_watch_url(&frame) {
        return FrameClass::Video(watch);
    }

    FrameClass::Suspect
}

/// Rule 1: probe the frame's query parameters for an inner media URL.
///
/// The first parameter present among `url`, `video`, `src` is the candidate.
/// It is accepted when its path carries a media extension, or when the
/// frame's own hostname contains one of the video-host markers.
fn inner_video_url(frame: &Url) -> Option<String> {
    let inner = INNER_URL_PARAMS.iter().find_map(|name| {
        frame
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    })?;
    if inner.is_empty() {
        return None;
    }

    let host = frame.host_str().unwrap_or_default();
    let marker_host = VIDEO_HOST_MARKERS.iter().any(|marker| host.contains(marker));

    // Extension check runs on the path when the inner URL parses, on the
    // whole string when it is relative or opaque.
    let path_ends_in_media = match Url::parse(&inner) {
        Ok(parsed) => MEDIA_EXTENSION.is_match(parsed.path()),
        Err(_) => MEDIA_EXTENSION.is_match(&inner),
    };

    (path_ends_in_media || marker_host).then_some(inner)
}

/// Rule 2: canonicalize known video-sharing embeds to their watch page.
fn canonical_watch_url(frame: &Url) -> Option<String> {
    let host = frame.host_str()?;
    if !host.contains("youtube.com") && !host.contains("youtu.be") {
        return None;
    }

    let id = WATCH_VIDEO_ID
        .captures(frame.as_str())
        .and_then(|captures| captures.get(1))?
        .as_str();

    Some(format!("https://{host}/watch?v={id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_url_param_with_media_extension_wins() {
        let class = classify_frame("https://x.example/e?url=https://cdn.example.com/v.m3u8");
        assert_eq!(
            class,
            FrameClass::Video("https://cdn.example.com/v.m3u8".to_string())
        );
    }

    #[test]
    fn inner_url_params_probe_in_name_order() {
        // `video` outranks `src` even when `src` appears first in the query.
        let class = classify_frame("https://x.example/e?src=https://a.example/a.mp4&video=https://b.example/b.mp4");
        assert_eq!(class, FrameClass::Video("https://b.example/b.mp4".to_string()));
    }

    #[test]
    fn marker_host_accepts_inner_url_without_media_extension() {
        let class = classify_frame("https://play-cdn3.example/e?url=https://other.example/player");
        assert_eq!(
            class,
            FrameClass::Video("https://other.example/player".to_string())
        );
    }

    #[test]
    fn non_marker_host_rejects_extensionless_inner_url() {
        let class = classify_frame("https://ads.example/e?url=https://other.example/player");
        assert_eq!(class, FrameClass::Suspect);
    }

    #[test]
    fn embed_frame_canonicalizes_to_watch_page() {
        let class = classify_frame("https://www.youtube.com/embed/ABC123");
        assert_eq!(
            class,
            FrameClass::Video("https://www.youtube.com/watch?v=ABC123".to_string())
        );
    }

    #[test]
    fn short_host_frame_canonicalizes_on_its_own_host() {
        let class = classify_frame("https://youtu.be/ABC123");
        assert_eq!(class, FrameClass::Video("https://youtu.be/watch?v=ABC123".to_string()));
    }

    #[test]
    fn query_extension_does_not_count_as_path_extension() {
        // The extension test runs against the path, so a trailing query
        // parameter shaped like an extension must not promote the frame.
        let class = classify_frame("https://ads.example/e?url=https://other.example/page?f=.mp4");
        assert_eq!(class, FrameClass::Suspect);
    }

    #[test]
    fn unparsable_frame_url_is_suspect() {
        assert_eq!(classify_frame("not a url at all"), FrameClass::Suspect);
        assert_eq!(classify_frame("//scheme.less/embed"), FrameClass::Suspect);
    }

    #[test]
    fn unrelated_frame_is_suspect() {
        let class = classify_frame("https://ads.example/slot/728x90?campaign=42");
        assert_eq!(class, FrameClass::Suspect);
    }
}
