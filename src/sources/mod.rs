//! Content sources - the boundary to the DOM-probing collaborators.
//!
//! A source is one independent extraction call: the document probe, the
//! frame-script probe, the all-frames injection, or the lightweight
//! metadata probe. Sources are issued concurrently, each may suspend on
//! I/O, and each may fail or time out without affecting the others.
//!
//! [`gather`] is the fan-out join: it resolves every source under a
//! bounded wait and converts every failure to an absent entry, so no
//! error ever escapes past the per-source boundary into the merge
//! stage. `join_all` preserves the input slice's order, which is what
//! makes the pipeline's output independent of completion order.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::SourceResult;
use crate::types::source::SourceReply;

/// One independent extraction probe.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name for logging ("document", "frame-script", ...).
    fn name(&self) -> &str;

    /// Run the probe once and return its reply.
    async fn probe(&self) -> SourceResult<SourceReply>;
}

#[async_trait]
impl ContentSource for Box<dyn ContentSource> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn probe(&self) -> SourceResult<SourceReply> {
        (**self).probe().await
    }
}

/// Configuration for one gather invocation.
#[derive(Debug, Clone)]
pub struct GatherConfig {
    /// Bounded wait per source.
    pub timeout: Duration,

    /// Teardown signal. Once cancelled, results that resolve afterward
    /// are discarded rather than merged.
    pub cancel: CancellationToken,
}

impl Default for GatherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            cancel: CancellationToken::new(),
        }
    }
}

impl GatherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-source timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach a cancellation token owned by the invoking context.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Probe all sources concurrently and return their replies in input
/// order.
///
/// A source that fails, times out, or resolves after cancellation
/// contributes `None`. The returned list is what the merger consumes;
/// its order is the caller's priority order, never completion order.
pub async fn gather<S: ContentSource>(
    sources: &[S],
    config: &GatherConfig,
) -> Vec<Option<SourceReply>> {
    let probes = sources.iter().map(|source| async {
        tokio::select! {
            _ = config.cancel.cancelled() => {
                debug!(source = source.name(), "scrape cancelled, discarding source");
                None
            }
            outcome = tokio::time::timeout(config.timeout, source.probe()) => {
                match outcome {
                    Ok(Ok(reply)) => Some(reply),
                    Ok(Err(error)) => {
                        warn!(source = source.name(), error = %error, "source probe failed");
                        None
                    }
                    Err(_) => {
                        warn!(source = source.name(), "source probe timed out");
                        None
                    }
                }
            }
        }
    });

    join_all(probes).await
}
