//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the aggregation
//! library without wiring up real DOM probes.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{SourceError, SourceResult};
use crate::sources::ContentSource;
use crate::types::content::{FlipCard, HotspotGroup, HotspotPoint, KnowledgeCheck, TextBlock};
use crate::types::document::ContentMap;
use crate::types::metadata::Metadata;
use crate::types::source::SourceReply;

/// A mock content source for testing.
///
/// Returns a configured reply (or failure) after an optional delay, and
/// tracks how many times it was probed.
pub struct MockSource {
    name: String,
    reply: Option<SourceReply>,
    failure: Option<String>,
    delay: Option<Duration>,
    probes: Arc<RwLock<usize>>,
}

impl MockSource {
    /// Create a mock source with no reply configured; probing it yields
    /// a `NoResponse` error.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: None,
            failure: None,
            delay: None,
            probes: Arc::new(RwLock::new(0)),
        }
    }

    /// Reply with a full envelope.
    pub fn with_envelope(mut self, metadata: Option<Metadata>, content: Option<ContentMap>) -> Self {
        self.reply = Some(SourceReply::envelope(metadata, content));
        self
    }

    /// Reply with bare metadata, like the lightweight probe.
    pub fn with_bare_metadata(mut self, metadata: Metadata) -> Self {
        self.reply = Some(SourceReply::bare(metadata));
        self
    }

    /// Reply with an arbitrary preconstructed reply.
    pub fn with_reply(mut self, reply: SourceReply) -> Self {
        self.reply = Some(reply);
        self
    }

    /// Fail every probe with the given reason.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Sleep before resolving, to exercise timeouts and ordering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times this source was probed.
    pub fn probe_count(&self) -> usize {
        *self.probes.read().unwrap()
    }
}

#[async_trait]
impl ContentSource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self) -> SourceResult<SourceReply> {
        *self.probes.write().unwrap() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(reason) = &self.failure {
            return Err(SourceError::Failed {
                reason: reason.clone(),
            });
        }

        self.reply.clone().ok_or(SourceError::NoResponse)
    }
}

/// Content fixture: a small lesson with one of each common category.
pub fn sample_content() -> ContentMap {
    let mut content = ContentMap::new();
    content.flip_cards.push(FlipCard::new(
        "What is least privilege?",
        "Granting only the access a role actually needs.",
    ));
    content.hotspots.push(HotspotGroup::new(vec![
        HotspotPoint::new(0, "Firewall", "Filters inbound and outbound traffic"),
        HotspotPoint::new(1, "IDS", "Flags suspicious network activity"),
    ]));
    content.knowledge_checks.push(
        KnowledgeCheck::new("Which port does HTTPS use?")
            .with_choice("443", true)
            .with_choice("80", false)
            .with_feedback("HTTPS uses TCP port 443."),
    );
    content
        .text_blocks
        .push(TextBlock::new("Security begins with knowing your assets."));
    content
}

/// Metadata fixture for a typical lesson page.
pub fn sample_metadata() -> Metadata {
    Metadata::new()
        .with_url("https://lms.example.com/courses/sec-101/lessons/3")
        .with_course("Security Fundamentals")
        .with_lesson("Network Defenses")
        .with_path("sec-101/lessons/3")
}
