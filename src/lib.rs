//! Course Content Aggregation Library
//!
//! Extracts structured learning content (flip cards, quiz questions,
//! hotspots, tables, text, ...) from a course page by running several
//! independent, unreliable extraction probes and reconciling their
//! results into one clean document.
//!
//! # Design Philosophy
//!
//! - Sources fail independently; a failed probe contributes nothing
//!   and is never fatal
//! - Merge order is priority order, fixed by the caller - completion
//!   order of concurrent probes never affects output
//! - Deduplication is stable and idempotent despite sources returning
//!   the same logical content in different shapes
//! - No item is schema-validated: malformed payloads default their
//!   fields or get dropped by the filters, never raise
//!
//! # Usage
//!
//! ```rust,ignore
//! use coursegrab::{Aggregator, GatherConfig};
//!
//! // Probes in priority order: document, frame-script, all-frames,
//! // lightweight metadata.
//! let aggregator = Aggregator::default();
//! let document = aggregator.scrape(&sources, &GatherConfig::default()).await;
//!
//! if document.is_empty() {
//!     println!("nothing found");
//! } else {
//!     println!("{} items", document.statistics.total_items);
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - data model (categories, items, metadata, document)
//! - [`segment`] - run-on label splitting (title/description heuristic)
//! - [`filters`] - UI-chrome and system-message classifiers
//! - [`capture`] - raw-candidate → item constructors
//! - [`fingerprint`] - lossy dedup keys
//! - [`pipeline`] - merge, dedup, hotspot collapse, statistics
//! - [`sources`] - probe trait and the concurrent fan-out
//! - [`testing`] - mock sources and fixtures for tests

pub mod capture;
pub mod error;
pub mod filters;
pub mod fingerprint;
pub mod pipeline;
pub mod segment;
pub mod sources;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use error::{SourceError, SourceResult};
pub use types::{
    category::Category,
    config::{FilterConfig, SegmenterConfig},
    content::{
        Accordion, AccordionPanel, Choice, FlipCard, HotspotGroup, HotspotPoint, Image,
        KnowledgeCheck, ListBlock, Tab, Table, TabSet, TextBlock, Video,
    },
    document::{CombinedDocument, ContentMap, Statistics},
    metadata::Metadata,
    source::{ExtractionData, ExtractionResult, SourceReply},
};

// Re-export pipeline components
pub use pipeline::{
    aggregate_statistics, apply_category_passes, collapse_hotspots, dedup_content, merge_replies,
    Aggregator, MergedScrape,
};

// Re-export the capture/filter/segment layer
pub use capture::Capture;
pub use filters::{ExclusionFilter, SystemMessageFilter};
pub use fingerprint::Fingerprint;
pub use segment::{LabelSplit, Segmenter};

// Re-export the source boundary
pub use sources::{gather, ContentSource, GatherConfig};
