//! Data types for the aggregation pipeline.

pub mod category;
pub mod config;
pub mod content;
pub mod document;
pub mod metadata;
pub mod source;
