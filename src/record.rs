//! Record types for scan output.
//!
//! This module defines the structured output of a document scan: the media
//! kind taxonomy, the per-resource record, and the ordered result handed to
//! the consumer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a discovered media resource.
///
/// `IframeSuspect` marks an embedded frame whose content could not be
/// resolved to a concrete media type; it is "possibly media, unresolved".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    /// Playable video, including playlist manifests (`.m3u8`).
    Video,
    /// Playable audio.
    Audio,
    /// Network-served image (inline `data:` images are never reported).
    Image,
    /// Embedded frame that may host media but resisted classification.
    IframeSuspect,
}

impl MediaKind {
    /// Fixed sort weight. Higher weights render first; the value is purely
    /// presentational and never affects deduplication.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            MediaKind::Video => 4,
            MediaKind::IframeSuspect => 3,
            MediaKind::Audio => 2,
            MediaKind::Image => 1,
        }
    }

    /// Short lowercase label suitable for list rendering, e.g. `[video] <url>`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
            MediaKind::IframeSuspect => "iframe-suspect",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single discovered media resource.
///
/// `source` is the resolved URL as a plain string; equality between records
/// is exact string equality, with no further normalization. Records are
/// produced fresh on every scan and carry no state between scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Resource classification.
    pub kind: MediaKind,

    /// Resolved source URL.
    pub source: String,
}

/// Ordered output of one document scan.
///
/// Records are unique by `source` and sorted descending by kind weight;
/// records of equal weight keep their discovery order. An empty result means
/// "no media found", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    /// The ranked records.
    pub records: Vec<MediaRecord>,
}

impl ScanResult {
    /// Number of discovered resources, as shown by count indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the scan found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, MediaRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a MediaRecord;
    type IntoIter = std::slice::Iter<'a, MediaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for ScanResult {
    type Item = MediaRecord;
    type IntoIter = std::vec::IntoIter<MediaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_order_video_suspect_audio_image() {
        assert!(MediaKind::Video.weight() > MediaKind::IframeSuspect.weight());
        assert!(MediaKind::IframeSuspect.weight() > MediaKind::Audio.weight());
        assert!(MediaKind::Audio.weight() > MediaKind::Image.weight());
    }

    #[test]
    fn kind_serializes_as_kebab_case() {
        let json = serde_json::to_string(&MediaKind::IframeSuspect).unwrap_or_default();
        assert_eq!(json, r#""iframe-suspect""#);
    }

    #[test]
    fn result_serializes_as_bare_array() {
        let result = ScanResult {
            records: vec![MediaRecord {
                kind: MediaKind::Video,
                source: "https://cdn.example.com/v.mp4".to_string(),
            }],
        };
        let json = serde_json::to_string(&result).unwrap_or_default();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""kind":"video""#));
    }
}
