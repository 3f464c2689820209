//! # media-sniffer
//!
//! Media resource discovery engine for mutating HTML documents.
//!
//! This library walks a document for embedded media-like resources - video,
//! audio, images, and ambiguous embedded frames - classifies and
//! deduplicates them, and can keep the result synchronized as the document
//! changes, without ever modifying the document itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use media_sniffer::{scan, MediaKind};
//!
//! let html = r#"<html><body>
//! <video src="https://cdn.example.com/clip.mp4"></video>
//! <iframe src="https://www.youtube.com/embed/ABC123"></iframe>
//! </body></html>"#;
//!
//! let result = scan(html);
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.records[0].kind, MediaKind::Video);
//! ```
//!
//! ## How it works
//!
//! - **Extraction**: six fixed passes over the parsed document - playable
//!   elements, images, embedded frames, manifest-bearing source attributes,
//!   script text, and hyperlink targets - all feeding one scan-scoped
//!   seen-set so each URL is reported once.
//! - **Classification**: embedded frames are resolved by heuristics (inner
//!   URLs in query parameters, video-sharing embeds) or demoted to
//!   "possibly media, unresolved".
//! - **Ranking**: results are stably sorted video > suspect frame > audio >
//!   image; ties keep discovery order.
//! - **Refresh**: the [`Scheduler`] re-scans on debounced mutation
//!   notifications, once at startup, and keeps the consumer's scaffold
//!   alive with a fallback poll. See the [`scheduler`] module.
//!
//! Scanning is read-only and error-free by construction: malformed
//! attributes and unparsable URLs are treated as absent candidates, and an
//! empty document yields an empty result.

mod classify;
mod dedup;
mod error;
mod extract;
mod options;
mod patterns;
mod record;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Mutation-driven refresh scheduling.
pub mod scheduler;

/// URL utilities for source resolution and inline-data detection.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use record::{MediaKind, MediaRecord, ScanResult};
pub use scheduler::{DocumentSource, Scheduler, SchedulerCfg, SchedulerHandle, Surface};

/// Scans an HTML document for media resources using default options.
///
/// Synchronous and pure with respect to the document: the same markup always
/// produces the same ordered result, and the document is never modified.
///
/// # Example
///
/// ```rust
/// use media_sniffer::scan;
///
/// let result = scan(r#"<audio src="https://example.com/track.ogg"></audio>"#);
/// assert_eq!(result.records[0].source, "https://example.com/track.ogg");
/// ```
#[must_use]
pub fn scan(html: &str) -> ScanResult {
    scan_with_options(html, &Options::default())
}

/// Scans an HTML document for media resources with custom options.
///
/// # Example
///
/// ```rust
/// use media_sniffer::{scan_with_options, Options};
///
/// let options = Options {
///     base_url: Some("https://example.com/watch/".to_string()),
///     ..Options::default()
/// };
///
/// let result = scan_with_options(r#"<a href="episode-1.mp4">ep 1</a>"#, &options);
/// assert_eq!(result.records[0].source, "https://example.com/watch/episode-1.mp4");
/// ```
#[must_use]
pub fn scan_with_options(html: &str, options: &Options) -> ScanResult {
    extract::scan_document(html, options)
}

/// Scans HTML bytes with automatic character encoding detection.
///
/// Detects the charset from meta tags (defaulting to UTF-8), transcodes,
/// and scans. Undecodable bytes are replaced, never raised as errors.
#[must_use]
pub fn scan_bytes(html: &[u8]) -> ScanResult {
    scan_bytes_with_options(html, &Options::default())
}

/// Scans HTML bytes with custom options and automatic encoding detection.
#[must_use]
pub fn scan_bytes_with_options(html: &[u8], options: &Options) -> ScanResult {
    let html_str = encoding::transcode_to_utf8(html);
    scan_with_options(&html_str, options)
}
