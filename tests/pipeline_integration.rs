//! Integration tests for the full aggregation pipeline.
//!
//! These exercise the public API end to end: concurrent source
//! fan-out, priority-ordered merge, dedup, hotspot collapse, and
//! statistics - the way the browser-side collaborators drive it.

use std::time::Duration;

use coursegrab::testing::{sample_content, sample_metadata, MockSource};
use coursegrab::{
    Aggregator, Capture, ContentMap, FlipCard, GatherConfig, HotspotGroup, Metadata, SourceReply,
    TextBlock,
};

/// Build the typical four-probe lineup: document probe first (highest
/// priority), then frame-script, all-frames, and the lightweight
/// metadata probe.
fn standard_sources() -> Vec<MockSource> {
    let mut frame_content = ContentMap::new();
    frame_content
        .text_blocks
        .push(TextBlock::new("Security begins with knowing your assets."));
    frame_content
        .text_blocks
        .push(TextBlock::new("Patching closes known vulnerabilities."));

    vec![
        MockSource::new("document").with_envelope(Some(sample_metadata()), Some(sample_content())),
        MockSource::new("frame-script").with_envelope(None, Some(frame_content)),
        MockSource::new("all-frames").failing("no accessible frames"),
        MockSource::new("metadata").with_bare_metadata(
            Metadata::new()
                .with_course("Stale Course Name")
                .with_path("sec-101/lessons/3"),
        ),
    ]
}

#[tokio::test]
async fn test_full_scrape_produces_one_clean_document() {
    let aggregator = Aggregator::default();
    let document = aggregator
        .scrape(&standard_sources(), &GatherConfig::default())
        .await;

    // Metadata: document probe outranks the lightweight probe.
    assert_eq!(document.metadata.course, "Security Fundamentals");
    assert_eq!(document.metadata.path, "sec-101/lessons/3");
    assert!(!document.metadata.scraped_at.is_empty());

    // The shared text block was deduplicated across sources.
    let texts: Vec<&str> = document
        .content
        .text_blocks
        .iter()
        .map(|b| b.content.as_str())
        .collect();
    assert_eq!(
        texts,
        vec![
            "Security begins with knowing your assets.",
            "Patching closes known vulnerabilities."
        ]
    );

    // One hotspot group, contiguous indices.
    assert_eq!(document.content.hotspots.len(), 1);

    // Statistics are internally consistent.
    assert_eq!(
        document.statistics.total_items,
        document.statistics.category_sum()
    );
    // 1 flip card + 1 hotspot group + 1 knowledge check + 2 text blocks.
    assert_eq!(document.statistics.total_items, 5);
}

#[tokio::test]
async fn test_all_sources_failing_yields_nothing_found() {
    let sources = vec![
        MockSource::new("document").failing("page not loaded"),
        MockSource::new("frame-script"),
        MockSource::new("all-frames").failing("injection refused"),
    ];

    let document = Aggregator::default()
        .scrape(&sources, &GatherConfig::default())
        .await;

    assert!(document.is_empty());
    assert_eq!(document.statistics.total_items, 0);
    // Still a well-formed document, never a crash.
    assert!(!document.metadata.scraped_at.is_empty());
}

#[tokio::test]
async fn test_slow_source_is_dropped_but_others_survive() {
    let sources = vec![
        MockSource::new("document")
            .with_envelope(Some(sample_metadata()), Some(sample_content()))
            .with_delay(Duration::from_millis(200)),
        MockSource::new("metadata")
            .with_bare_metadata(Metadata::new().with_course("Fallback Course")),
    ];

    let config = GatherConfig::new().with_timeout(Duration::from_millis(20));
    let document = Aggregator::default().scrape(&sources, &config).await;

    // The rich source timed out; only the lightweight metadata landed.
    assert_eq!(document.metadata.course, "Fallback Course");
    assert_eq!(document.statistics.total_items, 0);
}

#[tokio::test]
async fn test_hotspot_groups_collapse_across_probes() {
    // Two probes saw the same graphic and partially overlapping points.
    let capture = Capture::default();
    let group_a = HotspotGroup::new(
        [
            "Require MFAThe first time a user logs in, they must set up MFA.",
            "Password PolicyPasswords rotate every ninety days.",
            "Audit LogsEvery admin action is recorded.",
        ]
        .into_iter()
        .enumerate()
        .filter_map(|(i, label)| capture.point(i, label))
        .collect(),
    );
    let group_b = HotspotGroup::new(
        [
            "Password PolicyPasswords rotate every ninety days.",
            "Audit LogsEvery admin action is recorded.",
            "Session TimeoutIdle sessions end after fifteen minutes.",
            "Least PrivilegeYour role grants only the access it needs.",
        ]
        .into_iter()
        .enumerate()
        .filter_map(|(i, label)| capture.point(i, label))
        .collect(),
    );

    let mut content_a = ContentMap::new();
    content_a.hotspots.push(group_a);
    let mut content_b = ContentMap::new();
    content_b.hotspots.push(group_b);

    let sources = vec![
        MockSource::new("document").with_envelope(None, Some(content_a)),
        MockSource::new("all-frames").with_envelope(None, Some(content_b)),
    ];

    let document = Aggregator::default()
        .scrape(&sources, &GatherConfig::default())
        .await;

    assert_eq!(document.content.hotspots.len(), 1);
    let points = &document.content.hotspots[0].points;
    assert_eq!(points.len(), 5);
    let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(points[0].title, "Require MFA");
    assert_eq!(document.statistics.hotspots, 1);
}

#[tokio::test]
async fn test_combine_is_deterministic_for_fixed_input_order() {
    let make_replies = || {
        let mut a = ContentMap::new();
        a.flip_cards.push(FlipCard::new("Term one", "Definition one"));
        let mut b = ContentMap::new();
        b.flip_cards.push(FlipCard::new("Term two", "Definition two"));
        vec![
            Some(SourceReply::envelope(
                Some(Metadata::new().with_course("C")),
                Some(a),
            )),
            Some(SourceReply::envelope(None, Some(b))),
        ]
    };

    let aggregator = Aggregator::default();
    let first = aggregator.combine(make_replies());
    let second = aggregator.combine(make_replies());

    assert_eq!(first.content, second.content);
    assert_eq!(first.statistics, second.statistics);
}

#[tokio::test]
async fn test_reinvocation_starts_from_a_fresh_accumulator() {
    let aggregator = Aggregator::default();
    let sources = standard_sources();

    let first = aggregator.scrape(&sources, &GatherConfig::default()).await;
    let second = aggregator.scrape(&sources, &GatherConfig::default()).await;

    // No accumulation across scrapes: identical input, identical counts.
    assert_eq!(first.statistics, second.statistics);
    assert_eq!(sources[0].probe_count(), 2);
}

#[test]
fn test_document_serializes_with_expected_shape() {
    let mut content = ContentMap::new();
    content
        .text_blocks
        .push(TextBlock::new("A paragraph of lesson prose"));

    let document = Aggregator::default().combine(vec![Some(SourceReply::envelope(
        Some(Metadata::new().with_course("Serialization 101")),
        Some(content),
    ))]);

    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["metadata"]["course"], "Serialization 101");
    assert!(json["content"]["flipCards"].is_array());
    assert!(json["content"]["rawText"].is_string());
    assert_eq!(json["statistics"]["textBlocks"], 1);
    assert_eq!(json["statistics"]["totalItems"], 1);
}
