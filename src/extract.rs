//! Core document scanning: the six-pass media URL extractor.
//!
//! Each scan parses the document once and walks it in a fixed pass order,
//! feeding every accepted candidate through one shared seen-set so later
//! passes never re-emit a URL an earlier pass already claimed. The document
//! is only ever read; missing or malformed attribute values are treated as
//! absent candidates, not errors.

use dom_query::{Document, Selection};
use url::Url;

use crate::classify::{self, FrameClass};
use crate::dedup::{self, SeenSet};
use crate::options::Options;
use crate::patterns::{
    ANCHOR_SELECTOR, ANY_SOURCE_SELECTOR, FRAME_SELECTOR, IMAGE_SELECTOR, M3U8_MARKER,
    MEDIA_EXTENSION, NESTED_SOURCE_SELECTOR, SCRIPT_MEDIA_URL, SCRIPT_SELECTOR,
};
use crate::record::{MediaKind, MediaRecord, ScanResult};
use crate::url_utils;

/// Run one full scan over an HTML document.
pub(crate) fn scan_document(html: &str, options: &Options) -> ScanResult {
    let doc = Document::from(html);
    let base = options
        .base_url
        .as_deref()
        .and_then(url_utils::parse_absolute);
    let base = base.as_ref();

    let mut seen = SeenSet::new();
    let mut records = Vec::new();

    // Pass order is fixed; the shared seen-set makes the passes causal.
    collect_playable(&doc, base, &mut seen, &mut records);
    if options.include_images {
        collect_images(&doc, base, &mut seen, &mut records);
    }
    collect_frames(&doc, base, &mut seen, &mut records);
    collect_manifest_attributes(&doc, base, &mut seen, &mut records);
    collect_script_urls(&doc, &mut seen, &mut records);
    collect_anchor_targets(&doc, base, &mut seen, &mut records);

    tracing::debug!(records = records.len(), "document scan complete");

    dedup::rank(&mut records);
    ScanResult { records }
}

/// Append a candidate unless its source was already claimed this scan.
fn push_unique(kind: MediaKind, source: String, seen: &mut SeenSet, out: &mut Vec<MediaRecord>) {
    if seen.insert(&source) {
        out.push(MediaRecord { kind, source });
    }
}

/// Resolve one element's attribute into a candidate source.
fn attr_source(el: &Selection, attr: &str, base: Option<&Url>) -> Option<String> {
    let raw = el.attr(attr)?;
    url_utils::resolve_source(&raw, base)
}

/// Pass 1: video/audio elements and their nested source children.
/// Kind is decided by the enclosing element type.
fn collect_playable(doc: &Document, base: Option<&Url>, seen: &mut SeenSet, out: &mut Vec<MediaRecord>) {
    for (tag, kind) in [("video", MediaKind::Video), ("audio", MediaKind::Audio)] {
        for node in doc.select(tag).nodes() {
            let el = Selection::from(*node);
            if let Some(source) = attr_source(&el, "src", base) {
                push_unique(kind, source, seen, out);
            }
            for child in el.select(NESTED_SOURCE_SELECTOR).nodes() {
                if let Some(source) = attr_source(&Selection::from(*child), "src", base) {
                    push_unique(kind, source, seen, out);
                }
            }
        }
    }
}

/// Pass 2: image elements, excluding inline `data:` payloads.
fn collect_images(doc: &Document, base: Option<&Url>, seen: &mut SeenSet, out: &mut Vec<MediaRecord>) {
    for node in doc.select(IMAGE_SELECTOR).nodes() {
        let Some(source) = attr_source(&Selection::from(*node), "src", base) else {
            continue;
        };
        if url_utils::is_inline_data(&source) {
            continue;
        }
        push_unique(MediaKind::Image, source, seen, out);
    }
}

/// Pass 3: embedded frames, classified inline.
fn collect_frames(doc: &Document, base: Option<&Url>, seen: &mut SeenSet, out: &mut Vec<MediaRecord>) {
    for node in doc.select(FRAME_SELECTOR).nodes() {
        let Some(frame_src) = attr_source(&Selection::from(*node), "src", base) else {
            continue;
        };
        // The frame URL is consumed even when classification emits a
        // replacement URL, so later passes cannot re-add the frame itself.
        if !seen.insert(&frame_src) {
            continue;
        }
        match classify::classify_frame(&frame_src) {
            FrameClass::Video(resolved) => {
                push_unique(MediaKind::Video, resolved, seen, out);
            }
            FrameClass::Suspect => out.push(MediaRecord {
                kind: MediaKind::IframeSuspect,
                source: frame_src,
            }),
        }
    }
}

/// Pass 4: any remaining element whose source attribute carries a playlist
/// manifest marker, regardless of tag.
fn collect_manifest_attributes(
    doc: &Document,
    base: Option<&Url>,
    seen: &mut SeenSet,
    out: &mut Vec<MediaRecord>,
) {
    for node in doc.select(ANY_SOURCE_SELECTOR).nodes() {
        let Some(source) = attr_source(&Selection::from(*node), "src", base) else {
            continue;
        };
        if source.contains(M3U8_MARKER) {
            push_unique(MediaKind::Video, source, seen, out);
        }
    }
}

/// Pass 5: literal media URLs inside script text.
///
/// Best-effort substring matching; URL-shaped text that is never fetched
/// still matches, which is accepted.
fn collect_script_urls(doc: &Document, seen: &mut SeenSet, out: &mut Vec<MediaRecord>) {
    for node in doc.select(SCRIPT_SELECTOR).nodes() {
        let text = Selection::from(*node).text();
        for found in SCRIPT_MEDIA_URL.find_iter(&text) {
            push_unique(MediaKind::Video, found.as_str().to_string(), seen, out);
        }
    }
}

/// Pass 6: hyperlinks whose resolved target ends in a media extension.
fn collect_anchor_targets(
    doc: &Document,
    base: Option<&Url>,
    seen: &mut SeenSet,
    out: &mut Vec<MediaRecord>,
) {
    for node in doc.select(ANCHOR_SELECTOR).nodes() {
        let Some(target) = attr_source(&Selection::from(*node), "href", base) else {
            continue;
        };
        if MEDIA_EXTENSION.is_match(&target) {
            push_unique(MediaKind::Video, target, seen, out);
        }
    }
}
