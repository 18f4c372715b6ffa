//! The closed set of content categories a course page can yield.

use serde::{Deserialize, Serialize};

/// A content category recognized by the aggregation pipeline.
///
/// The set is closed: probes may only report items under one of these
/// keys (plus the free-form `rawText` string, which lives directly on
/// [`ContentMap`](crate::types::document::ContentMap) since it is a
/// scalar, not a sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    FlipCards,
    Hotspots,
    KnowledgeChecks,
    Accordions,
    Tabs,
    Images,
    TextBlocks,
    Lists,
    Tables,
    Videos,
}

impl Category {
    /// All sequence categories, in their canonical output order.
    pub const ALL: [Category; 10] = [
        Category::FlipCards,
        Category::Hotspots,
        Category::KnowledgeChecks,
        Category::Accordions,
        Category::Tabs,
        Category::Images,
        Category::TextBlocks,
        Category::Lists,
        Category::Tables,
        Category::Videos,
    ];

    /// The wire name used in serialized documents and statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FlipCards => "flipCards",
            Category::Hotspots => "hotspots",
            Category::KnowledgeChecks => "knowledgeChecks",
            Category::Accordions => "accordions",
            Category::Tabs => "tabs",
            Category::Images => "images",
            Category::TextBlocks => "textBlocks",
            Category::Lists => "lists",
            Category::Tables => "tables",
            Category::Videos => "videos",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
