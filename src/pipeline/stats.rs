//! Statistics aggregation - per-category counts and the grand total.

use crate::types::document::{ContentMap, Statistics};

/// Compute the per-category counts for a finished accumulator.
///
/// Each count is the category's sequence length (hotspots is 0 or 1
/// after the collapse pass) and `total_items` is their sum, so the
/// statistics are internally consistent by construction.
pub fn aggregate_statistics(content: &ContentMap) -> Statistics {
    let mut stats = Statistics {
        flip_cards: content.flip_cards.len(),
        hotspots: content.hotspots.len(),
        knowledge_checks: content.knowledge_checks.len(),
        accordions: content.accordions.len(),
        tabs: content.tabs.len(),
        images: content.images.len(),
        text_blocks: content.text_blocks.len(),
        lists: content.lists.len(),
        tables: content.tables.len(),
        videos: content.videos.len(),
        total_items: 0,
    };
    stats.total_items = stats.category_sum();
    stats
}
