// End-to-end pipeline tests: walk, chunk, write indexes

use crate::common::{create_test_docs, mixed_document, test_pipeline};
use mdslice::core::types::ChunkRecord;
use std::fs;

#[test]
fn test_directory_run_writes_one_index_per_document() {
    let docs = create_test_docs(&[
        ("intro.md", "Opening paragraph of the intro document."),
        ("guide/setup.md", "Setup instructions paragraph text."),
        ("notes.txt", "ignored, wrong extension"),
    ]);
    let (pipeline, output) = test_pipeline();

    let stats = pipeline.process(docs.path()).unwrap();

    assert_eq!(stats.files_processed, 2);
    assert!(output.path().join("intro/chunk_index.json").exists());
    assert!(output.path().join("setup/chunk_index.json").exists());
    assert!(!output.path().join("notes").exists());
}

#[test]
fn test_index_contents_match_returned_records() {
    let docs = create_test_docs(&[("doc.md", &mixed_document())]);
    let (pipeline, output) = test_pipeline();

    let records = pipeline.process_file(&docs.path().join("doc.md")).unwrap();

    let json = fs::read_to_string(output.path().join("doc/chunk_index.json")).unwrap();
    let written: Vec<ChunkRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(written.len(), records.len());
    for (a, b) in written.iter().zip(records.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn test_rerun_replaces_stale_output() {
    let docs = create_test_docs(&[("doc.md", "First version of the document body.")]);
    let (pipeline, output) = test_pipeline();

    pipeline.process_file(&docs.path().join("doc.md")).unwrap();
    let leftover = output.path().join("doc/extra.json");
    fs::write(&leftover, "{}").unwrap();

    pipeline.process_file(&docs.path().join("doc.md")).unwrap();

    assert!(!leftover.exists(), "stale artifacts must be cleared");
    assert!(output.path().join("doc/chunk_index.json").exists());
}

#[test]
fn test_stats_count_chunks_across_files() {
    let docs = create_test_docs(&[
        ("a.md", "Paragraph one of file a.\n\nAnd paragraph two of file a."),
        ("b.md", "Single paragraph of file b."),
    ]);
    let (pipeline, _output) = test_pipeline();

    let stats = pipeline.process(docs.path()).unwrap();

    assert_eq!(stats.files_processed, 2);
    assert!(stats.chunks_created >= 3);
    assert!(chrono::DateTime::parse_from_rfc3339(&stats.generated_at).is_ok());
}

#[test]
fn test_missing_input_is_an_error() {
    let (pipeline, _output) = test_pipeline();
    assert!(pipeline
        .process(std::path::Path::new("/no/such/input.md"))
        .is_err());
}
