//! Source merger - fold per-source results into one accumulator.
//!
//! A pure, order-sensitive fold: the input list's order encodes
//! priority (first non-empty wins metadata ties) and item arrival order
//! within each category is preserved exactly. Duplicates are NOT
//! removed here - dedup runs once over the merged whole so that
//! cross-source duplicates are caught.

use tracing::debug;

use crate::types::document::ContentMap;
use crate::types::metadata::Metadata;
use crate::types::source::SourceReply;

/// The merged state before dedup and statistics.
#[derive(Debug, Clone, Default)]
pub struct MergedScrape {
    pub metadata: Metadata,
    pub content: ContentMap,
}

/// Fold an ordered list of optional source replies into one accumulator.
///
/// Absent entries and envelopes with `success == false` are skipped -
/// a failed source is normal operation, not an error. Bare metadata
/// replies merge directly as metadata.
pub fn merge_replies(replies: Vec<Option<SourceReply>>) -> MergedScrape {
    let mut merged = MergedScrape::default();

    for (position, reply) in replies.into_iter().enumerate() {
        match reply {
            None => {
                debug!(position, "source absent, skipping");
            }
            Some(SourceReply::Bare(metadata)) => {
                merged.metadata.merge_from(&metadata);
            }
            Some(SourceReply::Envelope(result)) => {
                if !result.success {
                    debug!(position, "source reported failure, skipping");
                    continue;
                }
                if let Some(metadata) = result.data.metadata {
                    merged.metadata.merge_from(&metadata);
                }
                if let Some(content) = result.data.content {
                    merged.content.absorb(content);
                }
            }
        }
    }

    merged
}
