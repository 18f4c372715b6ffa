//! Aggregation pipeline - the core of the library.
//!
//! The pipeline folds a priority-ordered list of per-source results
//! into one accumulator, deduplicates it, collapses hotspot groups,
//! runs the category-specific extra passes, and derives statistics.
//! Everything here is synchronous and single-threaded over
//! already-resolved results; the async fan-out lives in
//! [`crate::sources`].

pub mod dedup;
pub mod merge;
pub mod stats;

pub use dedup::{apply_category_passes, collapse_hotspots, dedup_content};
pub use merge::{merge_replies, MergedScrape};
pub use stats::aggregate_statistics;

use chrono::Utc;
use tracing::info;

use crate::filters::SystemMessageFilter;
use crate::sources::{gather, ContentSource, GatherConfig};
use crate::types::config::FilterConfig;
use crate::types::document::CombinedDocument;
use crate::types::source::SourceReply;

/// Combines per-source extraction results into one clean document.
///
/// Holds the filter configuration applied at merge time. Each call to
/// [`Aggregator::combine`] builds a fresh accumulator; there is no
/// state carried across scrape invocations.
pub struct Aggregator {
    system: SystemMessageFilter,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

impl Aggregator {
    pub fn new(filters: &FilterConfig) -> Self {
        Self {
            system: SystemMessageFilter::from_config(filters),
        }
    }

    /// Run the synchronous pipeline over already-resolved results.
    ///
    /// The input order is the priority order; completion order of the
    /// underlying probes must not leak in here. Never fails: the
    /// degenerate outcome is an all-empty document.
    pub fn combine(&self, replies: Vec<Option<SourceReply>>) -> CombinedDocument {
        let merged = merge_replies(replies);
        let mut metadata = merged.metadata;
        let mut content = merged.content;

        if metadata.scraped_at.is_empty() {
            metadata.scraped_at = Utc::now().to_rfc3339();
        }

        dedup_content(&mut content);
        collapse_hotspots(&mut content);
        apply_category_passes(&mut content, &self.system);

        let statistics = aggregate_statistics(&content);
        info!(total_items = statistics.total_items, "scrape combined");

        CombinedDocument {
            metadata,
            content,
            statistics,
        }
    }

    /// Probe all sources concurrently, then combine.
    ///
    /// Source failures and timeouts contribute nothing; the slice order
    /// of `sources` fixes the priority order of the merge.
    pub async fn scrape<S: ContentSource>(
        &self,
        sources: &[S],
        config: &GatherConfig,
    ) -> CombinedDocument {
        let replies = gather(sources, config).await;
        self.combine(replies)
    }
}
