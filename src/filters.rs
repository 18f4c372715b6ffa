//! Candidate filters - classify raw label strings as noise.
//!
//! Two independent classifiers run before items enter the merge stage:
//! the exclusion filter drops interface controls ("Close Modal",
//! "Previous"), and the system-message filter drops transient player
//! chatter ("Loading...", "Please wait"). The system-message check runs
//! a second time during the knowledge-check dedup pass; both call sites
//! are deliberate and removing either changes observable output.

use crate::types::config::FilterConfig;

/// Minimum trimmed length for a label to count as content.
const MIN_LABEL_LEN: usize = 5;

/// Drops candidate labels that are UI chrome rather than content.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    // Lowercased at construction; matching is case-insensitive.
    vocabulary: Vec<String>,
}

impl ExclusionFilter {
    pub fn new(vocabulary: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            vocabulary: vocabulary
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.exclusion_vocabulary.iter().cloned())
    }

    /// True if the label should never become a content item: empty, too
    /// short, or containing a chrome-vocabulary entry.
    pub fn should_exclude(&self, label: &str) -> bool {
        let normalized = label.trim().to_lowercase();
        if normalized.chars().count() < MIN_LABEL_LEN {
            return true;
        }
        self.vocabulary.iter().any(|word| normalized.contains(word))
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}

/// Detects transient system messages masquerading as content.
#[derive(Debug, Clone)]
pub struct SystemMessageFilter {
    markers: Vec<String>,
}

impl SystemMessageFilter {
    pub fn new(markers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            markers: markers.into_iter().map(|m| m.into().to_lowercase()).collect(),
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.system_message_markers.iter().cloned())
    }

    /// True if the text contains any transient-message marker.
    pub fn is_system_message(&self, text: &str) -> bool {
        let normalized = text.to_lowercase();
        self.markers.iter().any(|marker| normalized.contains(marker))
    }
}

impl Default for SystemMessageFilter {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_labels_are_excluded() {
        let filter = ExclusionFilter::default();
        assert!(filter.should_exclude("Next")); // 4 chars
        assert!(filter.should_exclude("  ok  "));
        assert!(filter.should_exclude(""));
    }

    #[test]
    fn test_vocabulary_match_is_case_insensitive() {
        let filter = ExclusionFilter::default();
        assert!(filter.should_exclude("Close Modal"));
        assert!(filter.should_exclude("CLOSE MODAL"));
        assert!(filter.should_exclude("Previous Lesson"));
    }

    #[test]
    fn test_real_content_is_retained() {
        let filter = ExclusionFilter::default();
        assert!(!filter.should_exclude("Account Settings"));
        assert!(!filter.should_exclude("Require MFA for all admin users"));
    }

    #[test]
    fn test_system_message_detection() {
        let filter = SystemMessageFilter::default();
        assert!(filter.is_system_message("Loading..."));
        assert!(filter.is_system_message("Please wait while we fetch your lesson"));
        assert!(filter.is_system_message("You are offline"));
        assert!(!filter.is_system_message("Which port does HTTPS use?"));
    }

    #[test]
    fn test_fixture_vocabulary() {
        let filter = ExclusionFilter::new(["fixture"]);
        assert!(filter.should_exclude("a fixture label"));
        assert!(!filter.should_exclude("close modal")); // not in fixture vocab
    }
}
