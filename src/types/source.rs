//! Source reply shapes - what one extraction probe hands back.

use serde::{Deserialize, Serialize};

use crate::error::SourceResult;
use crate::types::document::ContentMap;
use crate::types::metadata::Metadata;

/// One probe's contribution: a success flag plus whatever metadata and
/// content it managed to extract. Transient; discarded after merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub success: bool,
    #[serde(default)]
    pub data: ExtractionData,
}

/// The payload inside an [`ExtractionResult`] envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionData {
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub content: Option<ContentMap>,
}

impl ExtractionResult {
    /// A successful result carrying metadata and content.
    pub fn ok(metadata: Option<Metadata>, content: Option<ContentMap>) -> Self {
        Self {
            success: true,
            data: ExtractionData { metadata, content },
        }
    }

    /// A result the probe itself marked as failed. The merger skips it.
    pub fn failed() -> Self {
        Self {
            success: false,
            data: ExtractionData::default(),
        }
    }
}

/// Everything a source call may resolve to.
///
/// Probes return either the full `{success, data}` envelope or, for the
/// lightweight metadata probe, a bare metadata object with no envelope.
/// A failed or non-responding probe contributes `None` upstream of this
/// type and never reaches the merger at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceReply {
    Envelope(ExtractionResult),
    Bare(Metadata),
}

impl SourceReply {
    /// A successful envelope reply.
    pub fn envelope(metadata: Option<Metadata>, content: Option<ContentMap>) -> Self {
        SourceReply::Envelope(ExtractionResult::ok(metadata, content))
    }

    /// A bare metadata reply, as produced by the lightweight probe.
    pub fn bare(metadata: Metadata) -> Self {
        SourceReply::Bare(metadata)
    }

    /// Parse a raw JSON reply from a probe.
    ///
    /// Accepts both the envelope and the bare-metadata shape; anything
    /// else is a payload error the caller converts to an absent source.
    pub fn parse(json: &str) -> SourceResult<SourceReply> {
        Ok(serde_json::from_str(json)?)
    }
}
