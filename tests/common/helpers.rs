//! Test helpers for chunking and pipeline integration tests

use mdslice::core::chunker::Chunker;
use mdslice::core::config::{ChunkMethod, Config};
use mdslice::core::pipeline::SlicePipeline;
use tempfile::TempDir;

/// Chunker with the default configuration
pub fn default_chunker() -> Chunker {
    Chunker::new(Config::default()).expect("default config must be valid")
}

/// Chunker with adjusted semantic bounds
pub fn semantic_chunker(min: usize, max: usize) -> Chunker {
    let mut config = Config::default();
    config.chunking.method = ChunkMethod::Semantic;
    config.chunking.chunk_min_length = min;
    config.chunking.chunk_max_length = max;
    Chunker::new(config).expect("config must be valid")
}

/// Chunker using the fixed-length strategy
pub fn length_chunker(chunk_size: usize, chunk_overlap: usize) -> Chunker {
    let mut config = Config::default();
    config.chunking.method = ChunkMethod::Length;
    config.length.chunk_size = chunk_size;
    config.length.chunk_overlap = chunk_overlap;
    Chunker::new(config).expect("config must be valid")
}

/// Chunker using the paragraph strategy
pub fn paragraph_chunker(max_chunk_size: usize) -> Chunker {
    let mut config = Config::default();
    config.chunking.method = ChunkMethod::Paragraph;
    config.paragraph.max_chunk_size = max_chunk_size;
    Chunker::new(config).expect("config must be valid")
}

/// Chunker with overlap injection enabled
pub fn overlap_chunker(min: usize, max: usize) -> Chunker {
    let mut config = Config::default();
    config.chunking.enable_overlap = true;
    config.chunking.overlap_min_length = min;
    config.chunking.overlap_max_length = max;
    Chunker::new(config).expect("config must be valid")
}

/// Create a document tree with specified files
///
/// # Arguments
/// * `files` - Slice of (relative_path, content) tuples
///
/// # Returns
/// TempDir containing the documents (keep alive during test)
pub fn create_test_docs(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
    temp
}

/// Pipeline writing into a dedicated temp output directory
pub fn test_pipeline() -> (SlicePipeline, TempDir) {
    let output = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.output.dir = output.path().to_path_buf();
    let pipeline = SlicePipeline::new(config).expect("default config must be valid");
    (pipeline, output)
}

/// A markdown fixture mixing headings, prose, a list and an image
pub fn mixed_document() -> String {
    let payload = "iVBORw0KGgoAAAANSUhEUg".repeat(4);
    format!(
        "# User Guide\n\n\
         Welcome to the guide. This opening paragraph introduces the product and \
         sets expectations for the chapters that follow.\n\n\
         **Installation**\n\n\
         Download the installer. Run it with default settings. Restart when prompted.\n\n\
         * step one of the checklist\n* step two of the checklist\n\n\
         ![diagram](data:image/png;base64,{payload})\n\n\
         After the diagram, configuration continues with the settings file described below."
    )
}
