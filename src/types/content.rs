//! Content item types - one struct per category.
//!
//! These are deliberately forgiving: every field defaults to an empty
//! string or sequence so that a malformed probe payload deserializes
//! into a defaulted item instead of aborting the pipeline. Items that
//! end up with no usable text are dropped later by the fingerprint
//! rules, not rejected here.

use serde::{Deserialize, Serialize};

/// A flip card: short prompt on the front, explanation on the back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipCard {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

impl FlipCard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// One labeled point on a hotspot graphic.
///
/// `raw_label` preserves the accessible name exactly as the probe saw
/// it; `title` and `description` are the segmenter's best-effort split
/// of that string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotPoint {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub raw_label: String,
}

impl HotspotPoint {
    pub fn new(index: usize, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            description: description.into(),
            raw_label: String::new(),
        }
    }

    /// Set the raw accessible-name string this point was parsed from.
    pub fn with_raw_label(mut self, raw_label: impl Into<String>) -> Self {
        self.raw_label = raw_label.into();
        self
    }

    /// The best available text for this point: title, then description,
    /// then the raw label.
    pub fn key_text(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if !self.description.is_empty() {
            &self.description
        } else {
            &self.raw_label
        }
    }
}

/// A group of hotspot points overlaid on one graphic.
///
/// After the pipeline runs there is at most one group per document; the
/// collapse pass merges overlapping groups from different probes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotGroup {
    #[serde(default)]
    pub points: Vec<HotspotPoint>,
}

impl HotspotGroup {
    pub fn new(points: Vec<HotspotPoint>) -> Self {
        Self { points }
    }
}

/// One answer choice in a knowledge check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl Choice {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// A quiz question with its choices and feedback text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCheck {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub feedback: String,
}

impl KnowledgeCheck {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            choices: Vec::new(),
            feedback: String::new(),
        }
    }

    pub fn with_choice(mut self, text: impl Into<String>, is_correct: bool) -> Self {
        self.choices.push(Choice::new(text, is_correct));
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }
}

/// One expandable panel in an accordion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionPanel {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// An accordion: a stack of expandable titled panels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accordion {
    #[serde(default)]
    pub panels: Vec<AccordionPanel>,
}

impl Accordion {
    pub fn with_panel(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.panels.push(AccordionPanel {
            title: title.into(),
            content: content.into(),
        });
        self
    }
}

/// One tab in a tab set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub content: String,
}

/// A set of labeled tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSet {
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl TabSet {
    pub fn with_tab(mut self, label: impl Into<String>, content: impl Into<String>) -> Self {
        self.tabs.push(Tab {
            label: label.into(),
            content: content.into(),
        });
        self
    }
}

/// A plain prose block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub content: String,
}

impl TextBlock {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A bulleted or numbered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    #[serde(default)]
    pub items: Vec<String>,
}

impl ListBlock {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// A data table with a header row and body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

/// An embedded image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
            caption: String::new(),
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

/// An embedded video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub src: String,
    /// MIME type or player kind (e.g. "video/mp4", "youtube").
    #[serde(rename = "type", default)]
    pub media_type: String,
}

impl Video {
    pub fn new(src: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            media_type: media_type.into(),
        }
    }
}
