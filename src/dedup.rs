//! Scan-scoped deduplication and rank ordering.
//!
//! The seen-set lives for exactly one scan and is consulted at the moment a
//! candidate is accepted, not after all passes finish - earlier passes block
//! later ones from re-adding the same URL under a different kind.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::record::MediaRecord;

/// Set of source strings already claimed during the current scan.
#[derive(Debug, Default)]
pub(crate) struct SeenSet(HashSet<String>);

impl SeenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim a source. Returns `false` if it was already claimed, in which
    /// case the caller must drop the candidate.
    pub(crate) fn insert(&mut self, source: &str) -> bool {
        if self.0.contains(source) {
            return false;
        }
        self.0.insert(source.to_owned());
        true
    }
}

/// Sort records descending by kind weight.
///
/// The sort is stable: records of equal weight keep their discovery order
/// from extraction. Ordering is purely presentational and runs after all
/// deduplication has happened.
pub(crate) fn rank(records: &mut [MediaRecord]) {
    records.sort_by_key(|record| Reverse(record.kind.weight()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MediaKind;

    fn record(kind: MediaKind, source: &str) -> MediaRecord {
        MediaRecord {
            kind,
            source: source.to_string(),
        }
    }

    #[test]
    fn seen_set_claims_each_source_once() {
        let mut seen = SeenSet::new();
        assert!(seen.insert("https://a.example/v.mp4"));
        assert!(!seen.insert("https://a.example/v.mp4"));
        assert!(seen.insert("https://a.example/v.mp4?other"));
    }

    #[test]
    fn rank_orders_by_weight_and_keeps_ties_stable() {
        let mut records = vec![
            record(MediaKind::Image, "https://x.example/1.png"),
            record(MediaKind::Audio, "https://x.example/1.mp3"),
            record(MediaKind::Video, "https://x.example/1.mp4"),
            record(MediaKind::Image, "https://x.example/2.png"),
            record(MediaKind::IframeSuspect, "https://x.example/embed"),
            record(MediaKind::Video, "https://x.example/2.mp4"),
        ];
        rank(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "https://x.example/1.mp4",
                "https://x.example/2.mp4",
                "https://x.example/embed",
                "https://x.example/1.mp3",
                "https://x.example/1.png",
                "https://x.example/2.png",
            ]
        );
    }
}
