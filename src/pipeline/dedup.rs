//! Deduplication - generic fingerprint pass, hotspot collapse, and the
//! category-specific extra passes.
//!
//! The generic pass runs once, after all sources are merged, so that
//! duplicates arriving from different probes are caught. It keeps the
//! first occurrence of each fingerprint and drops items whose
//! fingerprint is too short to identify anything. Output order is
//! first-seen order, which makes the pass idempotent: running it on its
//! own output changes nothing.
//!
//! The extra passes use their own truncation windows (100 for text
//! blocks and questions, 150 for lists) rather than the generic 200.
//! The windows are intentionally preserved as-is: a shorter key can
//! merge items the generic pass kept distinct, and that is accepted
//! behavior.

use indexmap::IndexSet;
use tracing::debug;

use crate::filters::SystemMessageFilter;
use crate::fingerprint::{is_viable, truncate_chars, Fingerprint};
use crate::types::content::{HotspotGroup, HotspotPoint};
use crate::types::document::ContentMap;

/// Truncation window for the text-block extra pass.
const TEXT_BLOCK_KEY_LEN: usize = 100;

/// Truncation window for the list extra pass.
const LIST_KEY_LEN: usize = 150;

/// Truncation window for the knowledge-check extra pass.
const QUESTION_KEY_LEN: usize = 100;

/// Truncation window for the description half of a hotspot point key.
const POINT_KEY_DESCRIPTION_LEN: usize = 100;

/// Run the generic fingerprint dedup over every category sequence.
pub fn dedup_content(content: &mut ContentMap) {
    dedup_by_fingerprint(&mut content.flip_cards);
    dedup_by_fingerprint(&mut content.hotspots);
    dedup_by_fingerprint(&mut content.knowledge_checks);
    dedup_by_fingerprint(&mut content.accordions);
    dedup_by_fingerprint(&mut content.tabs);
    dedup_by_fingerprint(&mut content.images);
    dedup_by_fingerprint(&mut content.text_blocks);
    dedup_by_fingerprint(&mut content.lists);
    dedup_by_fingerprint(&mut content.tables);
    dedup_by_fingerprint(&mut content.videos);
}

/// First-seen-wins dedup by generic fingerprint; items with non-viable
/// fingerprints are dropped even if unique.
fn dedup_by_fingerprint<T: Fingerprint>(items: &mut Vec<T>) {
    let mut seen: IndexSet<String> = IndexSet::new();
    let before = items.len();

    items.retain(|item| {
        let fingerprint = item.fingerprint();
        if !is_viable(&fingerprint) {
            return false;
        }
        seen.insert(fingerprint)
    });

    if items.len() < before {
        debug!(kept = items.len(), dropped = before - items.len(), "dedup pass");
    }
}

/// First-seen-wins dedup by an arbitrary key. Used by the extra passes,
/// which have no minimum-length rule.
fn dedup_by_key<T>(items: &mut Vec<T>, key: impl Fn(&T) -> String) {
    let mut seen: IndexSet<String> = IndexSet::new();
    items.retain(|item| seen.insert(key(item)));
}

/// Collapse all surviving hotspot groups into one synthetic group.
///
/// The course player renders one logical graphic several times across
/// probes and DOM fragments; the useful output is a single canonical
/// point list. Points are re-keyed on title plus the first 100
/// characters of the description (or the raw label when there is no
/// description), deduplicated first-seen-wins, and re-indexed
/// contiguously from 0.
pub fn collapse_hotspots(content: &mut ContentMap) {
    if content.hotspots.is_empty() {
        return;
    }

    let mut seen: IndexSet<String> = IndexSet::new();
    let mut points: Vec<HotspotPoint> = Vec::new();

    for group in content.hotspots.drain(..) {
        for point in group.points {
            if seen.insert(point_key(&point)) {
                points.push(point);
            }
        }
    }

    for (index, point) in points.iter_mut().enumerate() {
        point.index = index;
    }

    if points.is_empty() {
        debug!("hotspot collapse left no points");
    } else {
        content.hotspots.push(HotspotGroup::new(points));
    }
}

fn point_key(point: &HotspotPoint) -> String {
    let detail = if point.description.is_empty() {
        &point.raw_label
    } else {
        &point.description
    };
    format!(
        "{}{}",
        point.title,
        truncate_chars(detail, POINT_KEY_DESCRIPTION_LEN)
    )
}

/// The intentionally redundant category-specific passes.
///
/// Each keys on a shorter window than the generic fingerprint; the
/// knowledge-check pass also reapplies the system-message filter, the
/// second of the two independent applications.
pub fn apply_category_passes(content: &mut ContentMap, system: &SystemMessageFilter) {
    dedup_by_key(&mut content.text_blocks, |block| {
        truncate_chars(&block.content, TEXT_BLOCK_KEY_LEN)
    });

    dedup_by_key(&mut content.lists, |list| {
        truncate_chars(&list.items.join("|"), LIST_KEY_LEN)
    });

    content
        .knowledge_checks
        .retain(|check| !system.is_system_message(&check.question));
    dedup_by_key(&mut content.knowledge_checks, |check| {
        truncate_chars(&check.question, QUESTION_KEY_LEN)
    });
}
