//! Candidate capture - turn raw probe strings into content items.
//!
//! Probes hand over raw accessible-name strings; this layer applies the
//! exclusion and system-message filters and the label segmenter before
//! anything enters the merge stage. An item rejected here never reaches
//! the pipeline, which is why the system-message check also runs a
//! second, independent time at merge time.

use crate::filters::{ExclusionFilter, SystemMessageFilter};
use crate::segment::Segmenter;
use crate::types::config::FilterConfig;
use crate::types::content::{Choice, HotspotPoint, KnowledgeCheck, TextBlock};

/// Bundles the upstream filters and segmenter behind one capture API.
pub struct Capture {
    exclusion: ExclusionFilter,
    system: SystemMessageFilter,
    segmenter: Segmenter,
}

impl Default for Capture {
    fn default() -> Self {
        Self::new(&FilterConfig::default(), Segmenter::default())
    }
}

impl Capture {
    pub fn new(filters: &FilterConfig, segmenter: Segmenter) -> Self {
        Self {
            exclusion: ExclusionFilter::from_config(filters),
            system: SystemMessageFilter::from_config(filters),
            segmenter,
        }
    }

    /// Build a hotspot point from a raw marker label.
    ///
    /// Returns `None` for chrome strings and system messages. The raw
    /// label is preserved on the point so later dedup keys can fall
    /// back to it when segmentation produced nothing usable.
    pub fn point(&self, index: usize, raw_label: &str) -> Option<HotspotPoint> {
        if self.exclusion.should_exclude(raw_label) || self.system.is_system_message(raw_label) {
            return None;
        }

        let split = self.segmenter.split(raw_label);
        Some(
            HotspotPoint::new(index, split.title, split.description)
                .with_raw_label(raw_label.trim()),
        )
    }

    /// Build a knowledge check, rejecting system messages posing as
    /// questions ("Please wait..." rendered inside the quiz region).
    pub fn question(
        &self,
        question: &str,
        choices: Vec<Choice>,
        feedback: &str,
    ) -> Option<KnowledgeCheck> {
        let question = question.trim();
        if question.is_empty() || self.system.is_system_message(question) {
            return None;
        }

        Some(KnowledgeCheck {
            question: question.to_string(),
            choices,
            feedback: feedback.trim().to_string(),
        })
    }

    /// Build a text block, rejecting chrome strings and system chatter.
    pub fn text_block(&self, text: &str) -> Option<TextBlock> {
        if self.exclusion.should_exclude(text) || self.system.is_system_message(text) {
            return None;
        }
        Some(TextBlock::new(text.trim()))
    }
}
