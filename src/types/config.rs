//! Configuration for the filters and the label segmenter.
//!
//! The word lists ship with the production defaults but are plain data,
//! so tests (and callers scraping differently-worded course players)
//! can substitute their own fixtures.

use serde::{Deserialize, Serialize};

/// Word lists driving the exclusion and system-message filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// UI-chrome vocabulary. A candidate label that case-insensitively
    /// contains any entry is an interface control, not content.
    #[serde(default)]
    pub exclusion_vocabulary: Vec<String>,

    /// Substrings marking transient system messages ("loading",
    /// "please wait", ...). Matched against lowercased text.
    #[serde(default)]
    pub system_message_markers: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclusion_vocabulary: [
                "previous",
                "continue",
                "submit",
                "close modal",
                "open modal",
                "lesson menu",
                "navigation",
                "sidebar",
                "start course",
                "back to top",
                "skip to",
                "replay",
                "play video",
                "pause video",
                "mute",
                "unmute",
                "fullscreen",
                "volume",
                "toggle",
                "search bar",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            system_message_markers: [
                "loading",
                "please wait",
                "you are offline",
                "connection lost",
                "reconnecting",
                "session expired",
                "try again",
                "something went wrong",
                "saving progress",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the exclusion vocabulary.
    pub fn with_exclusion_vocabulary(
        mut self,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exclusion_vocabulary = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the system-message marker list.
    pub fn with_system_message_markers(
        mut self,
        markers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.system_message_markers = markers.into_iter().map(Into::into).collect();
        self
    }
}

/// Token list for the label segmenter's sentence-start rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Tokens that typically introduce the descriptive sentence inside
    /// a run-on label: articles, pronouns, imperatives, and discourse
    /// markers. Each token carries its trailing delimiter (a space or
    /// colon) so it only matches at a word start.
    #[serde(default)]
    pub sentence_tokens: Vec<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            sentence_tokens: [
                "The ", "This ", "These ", "That ", "You ", "Your ", "It ", "When ", "Where ",
                "While ", "If ", "Each ", "Every ", "Select ", "Click ", "Choose ", "Drag ",
                "Use ", "Review ", "Remember ", "Note:", "Once ", "After ", "Before ", "There ",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl SegmenterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sentence-token list.
    pub fn with_sentence_tokens(
        mut self,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.sentence_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }
}
