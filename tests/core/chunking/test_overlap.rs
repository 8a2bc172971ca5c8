// Overlap injection behavior through the public chunking API

use crate::common::{overlap_chunker, semantic_chunker};
use mdslice::core::config::ChunkingConfig;
use mdslice::core::overlap::OverlapInjector;
use mdslice::core::types::{Chunk, RecordKind};

const THREE_PARAGRAPHS: &str = "\
The first paragraph talks about installation and setup steps.\n\n\
The second paragraph covers configuration details at length.\n\n\
The third paragraph closes with troubleshooting advice.";

#[test]
fn test_overlap_disabled_by_default() {
    let records = semantic_chunker(10, 150).records(THREE_PARAGRAPHS);

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].content,
        "The first paragraph talks about installation and setup steps."
    );
}

#[test]
fn test_overlap_adds_neighbor_context() {
    let records = overlap_chunker(10, 30).records(THREE_PARAGRAPHS);

    assert_eq!(records.len(), 3, "overlap must not change chunk count");

    // Middle chunk carries a tail of its predecessor and a head of
    // its successor.
    let middle = &records[1].content;
    assert!(middle.contains("The second paragraph covers configuration details at length."));
    assert!(middle.contains("setup steps."));
    assert!(middle.contains("The third paragraph"));

    // Edge chunks gain context on one side only.
    assert!(records[0]
        .content
        .starts_with("The first paragraph talks about"));
    assert!(records[2]
        .content
        .ends_with("closes with troubleshooting advice."));
}

#[test]
fn test_overlap_bounded_by_max() {
    let records = overlap_chunker(10, 30).records(THREE_PARAGRAPHS);

    let first_len = "The first paragraph talks about installation and setup steps.".len();
    // Suffix overlap plus separator can add at most 30 + 2 chars.
    assert!(records[0].content.chars().count() <= first_len + 32);
}

#[test]
fn test_overlap_injector_idempotent() {
    let config = ChunkingConfig {
        overlap_min_length: 10,
        overlap_max_length: 30,
        ..ChunkingConfig::default()
    };
    let injector = OverlapInjector::new(&config);

    let chunks = vec![
        Chunk::text("The first paragraph talks about installation and setup steps."),
        Chunk::text("The second paragraph covers configuration details at length."),
        Chunk::text("The third paragraph closes with troubleshooting advice."),
    ];

    let once = injector.apply(chunks);
    let twice = injector.apply(once.clone());

    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.content, b.content, "second pass must be a no-op");
    }
}

#[test]
fn test_overlap_skips_marker_and_image_content() {
    let doc = format!(
        "Intro paragraph before the heading appears.\n\n# Middle Heading\n\n\
         ![pic](data:image/png;base64,QUFBQUFB)\n\n\
         Closing paragraph after the image reference."
    );
    let records = overlap_chunker(10, 30).records(&doc);

    for record in &records {
        if record.is_title {
            assert!(record.content.is_empty());
        }
        if record.kind == RecordKind::Image {
            assert!(record.content.starts_with("![pic]("));
            assert!(record.content.ends_with(')'));
        }
    }
}
