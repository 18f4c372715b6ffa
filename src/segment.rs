//! Label segmentation - split a run-on label into title and description.
//!
//! Course players render an interactive element's accessible name as a
//! short label concatenated directly with a sentence of explanatory
//! text, with no delimiter ("Require MFAThe first time a user logs
//! in..."). This module reconstructs the two halves.
//!
//! This is a best-effort heuristic, not a guaranteed-correct parse:
//! exactly one of four ordered rules fires, first match wins, and the
//! fallback leaves the whole string as the description. Each rule is an
//! independent pure function so it can be unit-tested and swapped in
//! isolation.

use regex::Regex;

use crate::types::config::SegmenterConfig;

/// A segmented label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSplit {
    pub title: String,
    pub description: String,
}

impl LabelSplit {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Maximum title length for the sentence-start rule.
const SENTENCE_RULE_MAX_TITLE: usize = 50;

/// Separator search window for the separator rule (character positions).
const SEPARATOR_MIN_POS: usize = 3;
const SEPARATOR_MAX_POS: usize = 40;

/// Splits run-on labels using an ordered chain of pattern rules.
pub struct Segmenter {
    sentence_tokens: Vec<String>,
    // A 1-40 char leading run ending in a lowercase letter, followed by
    // a fresh uppercase-then-lowercase run. Lazy, so the earliest
    // boundary wins.
    case_boundary: Regex,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::default())
    }
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self {
            sentence_tokens: config.sentence_tokens,
            case_boundary: Regex::new(r"(?s)^([A-Z].{0,38}?[a-z])([A-Z][a-z].*)$").unwrap(),
        }
    }

    /// Split a raw label into `{title, description}`.
    ///
    /// Empty or whitespace-only input yields an empty split.
    pub fn split(&self, raw: &str) -> LabelSplit {
        let text = raw.trim();
        if text.is_empty() {
            return LabelSplit::default();
        }

        self.sentence_start_rule(text)
            .or_else(|| self.capitalization_rule(text))
            .or_else(|| separator_rule(text))
            .unwrap_or_else(|| LabelSplit::new("", text))
    }

    /// Rule 1: split before the earliest sentence-introducing token.
    ///
    /// Fires when the text preceding the token is a plausible title
    /// (non-empty, at most 50 characters). If the description would
    /// start with a lowercase letter the split landed inside a word, so
    /// the title is re-split at its last uppercase-then-lowercase
    /// boundary and the reclaimed tail rejoins the description.
    fn sentence_start_rule(&self, text: &str) -> Option<LabelSplit> {
        let idx = self
            .sentence_tokens
            .iter()
            .flat_map(|token| text.match_indices(token.as_str()).map(|(i, _)| i))
            .filter(|&i| i > 0)
            .min()?;

        let prefix = &text[..idx];
        let title = prefix.trim();
        if title.is_empty() || title.chars().count() > SENTENCE_RULE_MAX_TITLE {
            return None;
        }

        let description = text[idx..].trim();
        if description.chars().next().is_some_and(|c| c.is_lowercase()) {
            if let Some(boundary) = last_case_boundary(prefix) {
                return Some(LabelSplit::new(
                    text[..boundary].trim(),
                    text[boundary..].trim(),
                ));
            }
        }

        Some(LabelSplit::new(title, description))
    }

    /// Rule 2: split at a capitalization boundary ("Primary
    /// DatabaseStores all records" → "Primary Database" / "Stores...").
    fn capitalization_rule(&self, text: &str) -> Option<LabelSplit> {
        let captures = self.case_boundary.captures(text)?;
        Some(LabelSplit::new(
            captures[1].trim(),
            captures[2].trim(),
        ))
    }
}

/// Rule 3: split on the first `:`, en dash, em dash, or plain hyphen
/// found at character positions 3 through 40.
fn separator_rule(text: &str) -> Option<LabelSplit> {
    for (pos, (byte_idx, ch)) in text.char_indices().enumerate() {
        if pos > SEPARATOR_MAX_POS {
            break;
        }
        if pos >= SEPARATOR_MIN_POS && matches!(ch, ':' | '\u{2013}' | '\u{2014}' | '-') {
            let title = text[..byte_idx].trim();
            let description = text[byte_idx + ch.len_utf8()..].trim();
            if title.is_empty() {
                return None;
            }
            return Some(LabelSplit::new(title, description));
        }
    }
    None
}

/// Byte index of the last uppercase letter immediately followed by a
/// lowercase letter, skipping the very first character.
fn last_case_boundary(text: &str) -> Option<usize> {
    let mut boundary = None;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if let Some(&(_, next)) = chars.peek() {
            if idx > 0 && ch.is_uppercase() && next.is_lowercase() {
                boundary = Some(idx);
            }
        }
    }
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_start_rule() {
        let segmenter = Segmenter::default();
        let split = segmenter
            .split("Require MFAThe first time a user logs in, they must set up MFA.");

        assert_eq!(split.title, "Require MFA");
        assert_eq!(
            split.description,
            "The first time a user logs in, they must set up MFA."
        );
    }

    #[test]
    fn test_capitalization_boundary_rule() {
        let segmenter = Segmenter::default();
        let split = segmenter.split("Primary DatabaseStores all customer records in one place");

        assert_eq!(split.title, "Primary Database");
        assert_eq!(split.description, "Stores all customer records in one place");
    }

    #[test]
    fn test_separator_rule() {
        let segmenter = Segmenter::default();
        let split = segmenter.split("Status: Active");

        assert_eq!(split.title, "Status");
        assert_eq!(split.description, "Active");
    }

    #[test]
    fn test_fallback_keeps_plain_text_as_description() {
        let segmenter = Segmenter::default();
        let split = segmenter.split("just some plain text");

        assert_eq!(split.title, "");
        assert_eq!(split.description, "just some plain text");
    }

    #[test]
    fn test_empty_input() {
        let segmenter = Segmenter::default();
        assert_eq!(segmenter.split(""), LabelSplit::default());
        assert_eq!(segmenter.split("   "), LabelSplit::default());
    }

    #[test]
    fn test_separator_ignored_outside_window() {
        let segmenter = Segmenter::default();

        // Hyphen at position 2 is inside a word, not a separator.
        let split = segmenter.split("co-op housing programs available here");
        assert_eq!(split.title, "");
        assert_eq!(split.description, "co-op housing programs available here");
    }

    #[test]
    fn test_lowercase_description_triggers_title_resplit() {
        // A token set whose entries start lowercase makes the split
        // land mid-sentence; the rule reclaims the title's tail from
        // its last case boundary.
        let segmenter = Segmenter::new(
            SegmenterConfig::new().with_sentence_tokens(["the "]),
        );
        let split = segmenter.split("Device Registry holds the full device list");

        assert_eq!(split.title, "Device");
        assert_eq!(split.description, "Registry holds the full device list");
    }

    #[test]
    fn test_long_prefix_does_not_fire_sentence_rule() {
        let segmenter = Segmenter::default();
        let long_prefix = "x".repeat(60);
        let text = format!("{long_prefix}The rest of the sentence goes here");

        let split = segmenter.split(&text);
        // Falls through to the fallback: an all-lowercase prefix has no
        // capitalization boundary or separator either.
        assert_eq!(split.title, "");
        assert_eq!(split.description, text);
    }
}
