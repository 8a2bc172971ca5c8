//! Slice command tests

use crate::common::create_test_docs;
use mdslice::cli::commands::slice::{self, SliceArgs};
use mdslice::cli::OutputFormat;
use mdslice::core::config::{ChunkMethod, Config};
use tempfile::TempDir;

fn slice_args(path: std::path::PathBuf, output: std::path::PathBuf) -> SliceArgs {
    SliceArgs {
        path,
        output: Some(output),
        method: None,
        min_length: None,
        max_length: None,
        enable_overlap: false,
        overlap_min: None,
        overlap_max: None,
        index_filename: None,
        include: vec![],
        exclude: vec![],
        quiet: true,
    }
}

#[test]
fn test_slice_single_file() {
    let docs = create_test_docs(&[(
        "guide.md",
        "# Guide\n\nFirst paragraph of the document body text.",
    )]);
    let output = TempDir::new().unwrap();

    let args = slice_args(docs.path().join("guide.md"), output.path().to_path_buf());
    slice::execute(args, Config::default(), OutputFormat::Json).unwrap();

    assert!(output.path().join("guide/chunk_index.json").exists());
}

#[test]
fn test_slice_directory_with_overrides() {
    let docs = create_test_docs(&[
        ("a.md", "Document a paragraph content here."),
        ("b.md", "Document b paragraph content here."),
    ]);
    let output = TempDir::new().unwrap();

    let mut args = slice_args(docs.path().to_path_buf(), output.path().to_path_buf());
    args.method = Some(ChunkMethod::Paragraph);
    args.index_filename = Some("chunks.json".to_string());
    slice::execute(args, Config::default(), OutputFormat::Json).unwrap();

    assert!(output.path().join("a/chunks.json").exists());
    assert!(output.path().join("b/chunks.json").exists());
}

#[test]
fn test_slice_missing_path_fails() {
    let output = TempDir::new().unwrap();
    let args = slice_args(
        std::path::PathBuf::from("/no/such/file.md"),
        output.path().to_path_buf(),
    );

    assert!(slice::execute(args, Config::default(), OutputFormat::Json).is_err());
}

#[test]
fn test_slice_invalid_bounds_fail() {
    let docs = create_test_docs(&[("doc.md", "Paragraph content.")]);
    let output = TempDir::new().unwrap();

    let mut args = slice_args(docs.path().join("doc.md"), output.path().to_path_buf());
    args.min_length = Some(500);
    args.max_length = Some(100);

    // Validation runs before any file is touched.
    assert!(slice::execute(args, Config::default(), OutputFormat::Json).is_err());
    assert!(!output.path().join("doc").exists());
}
