//! The combined document - the pipeline's sole output.

use serde::{Deserialize, Serialize};

use crate::types::category::Category;
use crate::types::content::{
    Accordion, FlipCard, HotspotGroup, Image, KnowledgeCheck, ListBlock, Table, TabSet, TextBlock,
    Video,
};
use crate::types::metadata::Metadata;

/// Content grouped by category.
///
/// One sequence per category plus the scalar `rawText` fallback. Every
/// key is always present in serialized output; probes that saw nothing
/// for a category simply contribute an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMap {
    #[serde(default)]
    pub flip_cards: Vec<FlipCard>,
    #[serde(default)]
    pub hotspots: Vec<HotspotGroup>,
    #[serde(default)]
    pub knowledge_checks: Vec<KnowledgeCheck>,
    #[serde(default)]
    pub accordions: Vec<Accordion>,
    #[serde(default)]
    pub tabs: Vec<TabSet>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub text_blocks: Vec<TextBlock>,
    #[serde(default)]
    pub lists: Vec<ListBlock>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub videos: Vec<Video>,
    /// Free-form page text captured when no structured probe matched.
    #[serde(default)]
    pub raw_text: String,
}

impl ContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another map's items after this one's, category by
    /// category, preserving arrival order. `raw_text` is a scalar and
    /// follows first-non-empty-wins instead.
    ///
    /// No deduplication happens here; that is a later, whole-document
    /// pass so cross-source duplicates are caught.
    pub fn absorb(&mut self, other: ContentMap) {
        self.flip_cards.extend(other.flip_cards);
        self.hotspots.extend(other.hotspots);
        self.knowledge_checks.extend(other.knowledge_checks);
        self.accordions.extend(other.accordions);
        self.tabs.extend(other.tabs);
        self.images.extend(other.images);
        self.text_blocks.extend(other.text_blocks);
        self.lists.extend(other.lists);
        self.tables.extend(other.tables);
        self.videos.extend(other.videos);
        if self.raw_text.is_empty() && !other.raw_text.is_empty() {
            self.raw_text = other.raw_text;
        }
    }

    /// Number of items in one category's sequence.
    pub fn len_of(&self, category: Category) -> usize {
        match category {
            Category::FlipCards => self.flip_cards.len(),
            Category::Hotspots => self.hotspots.len(),
            Category::KnowledgeChecks => self.knowledge_checks.len(),
            Category::Accordions => self.accordions.len(),
            Category::Tabs => self.tabs.len(),
            Category::Images => self.images.len(),
            Category::TextBlocks => self.text_blocks.len(),
            Category::Lists => self.lists.len(),
            Category::Tables => self.tables.len(),
            Category::Videos => self.videos.len(),
        }
    }

    /// True if every category is empty and there is no raw text.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.len_of(*c) == 0) && self.raw_text.is_empty()
    }
}

/// Per-category item counts plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub flip_cards: usize,
    #[serde(default)]
    pub hotspots: usize,
    #[serde(default)]
    pub knowledge_checks: usize,
    #[serde(default)]
    pub accordions: usize,
    #[serde(default)]
    pub tabs: usize,
    #[serde(default)]
    pub images: usize,
    #[serde(default)]
    pub text_blocks: usize,
    #[serde(default)]
    pub lists: usize,
    #[serde(default)]
    pub tables: usize,
    #[serde(default)]
    pub videos: usize,
    #[serde(default)]
    pub total_items: usize,
}

impl Statistics {
    /// The count recorded for one category.
    pub fn count_of(&self, category: Category) -> usize {
        match category {
            Category::FlipCards => self.flip_cards,
            Category::Hotspots => self.hotspots,
            Category::KnowledgeChecks => self.knowledge_checks,
            Category::Accordions => self.accordions,
            Category::Tabs => self.tabs,
            Category::Images => self.images,
            Category::TextBlocks => self.text_blocks,
            Category::Lists => self.lists,
            Category::Tables => self.tables,
            Category::Videos => self.videos,
        }
    }

    /// Sum of all per-category counts. Always equals `total_items` for
    /// a document produced by the pipeline.
    pub fn category_sum(&self) -> usize {
        Category::ALL.iter().map(|c| self.count_of(*c)).sum()
    }
}

/// The pipeline's final, deduplicated, statistics-annotated output.
///
/// Serializes with exactly the keys `metadata`, `content`, and
/// `statistics`. Built fresh on every scrape invocation; there is no
/// incremental merge across scrapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedDocument {
    pub metadata: Metadata,
    pub content: ContentMap,
    pub statistics: Statistics,
}

impl CombinedDocument {
    /// True if nothing at all was found. Callers should present this as
    /// an informational "nothing found" state, not a failure.
    pub fn is_empty(&self) -> bool {
        self.statistics.total_items == 0 && self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::content::TextBlock;

    #[test]
    fn test_absorb_appends_in_arrival_order() {
        let mut acc = ContentMap::new();
        acc.text_blocks.push(TextBlock::new("first"));

        let mut incoming = ContentMap::new();
        incoming.text_blocks.push(TextBlock::new("second"));
        incoming.text_blocks.push(TextBlock::new("third"));

        acc.absorb(incoming);

        let contents: Vec<&str> = acc.text_blocks.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_absorb_raw_text_first_wins() {
        let mut acc = ContentMap::new();

        let mut a = ContentMap::new();
        a.raw_text = "page text from document probe".to_string();
        let mut b = ContentMap::new();
        b.raw_text = "page text from frame probe".to_string();

        acc.absorb(a);
        acc.absorb(b);

        assert_eq!(acc.raw_text, "page text from document probe");
    }

    #[test]
    fn test_serialized_document_has_exactly_three_keys() {
        let doc = CombinedDocument::default();
        let json = serde_json::to_value(&doc).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["content", "metadata", "statistics"]);
    }

    #[test]
    fn test_serialized_content_has_all_category_keys() {
        let json = serde_json::to_value(ContentMap::new()).unwrap();
        let object = json.as_object().unwrap();

        for category in Category::ALL {
            assert!(
                object.get(category.as_str()).unwrap().is_array(),
                "missing or non-array key: {category}"
            );
        }
        assert!(object["rawText"].is_string());
    }
}
