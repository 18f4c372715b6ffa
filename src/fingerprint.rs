//! Dedup fingerprints - lossy string keys for equality comparison.
//!
//! A fingerprint is the item's primary text, truncated to 200
//! characters. It exists purely for dedup equality, not hashing or
//! integrity: two items identical only in their first 200 characters
//! collapse to one, and that truncation is load-bearing - downstream
//! behavior depends on it, so the window must stay exactly 200.
//!
//! The primary text is chosen in a fixed priority order (content,
//! question, title, description, label) mirrored per variant below.
//! Items whose fingerprint comes out shorter than 5 characters carry
//! too little text to identify and are dropped unconditionally.

use crate::types::content::{
    Accordion, FlipCard, HotspotGroup, Image, KnowledgeCheck, ListBlock, Table, TabSet, TextBlock,
    Video,
};

/// Truncation window for the generic fingerprint.
pub const FINGERPRINT_MAX_LEN: usize = 200;

/// Fingerprints shorter than this drop the item entirely.
pub const FINGERPRINT_MIN_LEN: usize = 5;

/// Delimiter joining multi-part fingerprints (hotspot points, list
/// items, panel titles).
pub const FINGERPRINT_DELIMITER: &str = "|";

/// Derives the dedup key for a content item.
pub trait Fingerprint {
    /// The raw primary text before truncation.
    fn primary_text(&self) -> String;

    /// The dedup key: primary text truncated to 200 characters.
    fn fingerprint(&self) -> String {
        truncate_chars(&self.primary_text(), FINGERPRINT_MAX_LEN)
    }
}

/// True if a fingerprint is long enough to keep its item.
pub fn is_viable(fingerprint: &str) -> bool {
    fingerprint.chars().count() >= FINGERPRINT_MIN_LEN
}

/// Truncate to at most `max` characters (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    text.chars().take(max).collect()
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|s| !s.trim().is_empty())
        .unwrap_or("")
}

impl Fingerprint for FlipCard {
    fn primary_text(&self) -> String {
        first_non_empty(&[self.front.as_str(), self.back.as_str()]).to_string()
    }
}

impl Fingerprint for HotspotGroup {
    // Per point: first non-empty of title / description / raw label,
    // all joined with the fixed delimiter.
    fn primary_text(&self) -> String {
        self.points
            .iter()
            .map(|p| p.key_text())
            .collect::<Vec<_>>()
            .join(FINGERPRINT_DELIMITER)
    }
}

impl Fingerprint for KnowledgeCheck {
    fn primary_text(&self) -> String {
        self.question.clone()
    }
}

impl Fingerprint for Accordion {
    fn primary_text(&self) -> String {
        self.panels
            .iter()
            .map(|p| first_non_empty(&[p.title.as_str(), p.content.as_str()]))
            .collect::<Vec<_>>()
            .join(FINGERPRINT_DELIMITER)
    }
}

impl Fingerprint for TabSet {
    fn primary_text(&self) -> String {
        self.tabs
            .iter()
            .map(|t| first_non_empty(&[t.label.as_str(), t.content.as_str()]))
            .collect::<Vec<_>>()
            .join(FINGERPRINT_DELIMITER)
    }
}

impl Fingerprint for TextBlock {
    fn primary_text(&self) -> String {
        self.content.clone()
    }
}

impl Fingerprint for ListBlock {
    fn primary_text(&self) -> String {
        self.items.join(FINGERPRINT_DELIMITER)
    }
}

impl Fingerprint for Table {
    fn primary_text(&self) -> String {
        if !self.headers.is_empty() {
            return self.headers.join(FINGERPRINT_DELIMITER);
        }
        self.rows
            .first()
            .map(|row| row.join(FINGERPRINT_DELIMITER))
            .unwrap_or_default()
    }
}

impl Fingerprint for Image {
    fn primary_text(&self) -> String {
        first_non_empty(&[self.src.as_str(), self.alt.as_str(), self.caption.as_str()]).to_string()
    }
}

impl Fingerprint for Video {
    fn primary_text(&self) -> String {
        self.src.clone()
    }
}
