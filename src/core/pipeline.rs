//! Slicing pipeline orchestration.
//!
//! Coordinates the end-to-end workflow:
//! 1. Walk the input (file or directory tree)
//! 2. Read file contents
//! 3. Chunk text and emit records
//! 4. Write one `chunk_index.json` per document
//!
//! Output layout: each document gets its own directory under the
//! output root, named after the file stem, holding the index file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::chunker::Chunker;
use crate::core::config::Config;
use crate::core::error::{Result, SliceError};
use crate::core::types::{ChunkRecord, SliceStats};
use crate::core::walker::FileWalker;

/// Orchestrates the slicing pipeline
pub struct SlicePipeline {
    walker: FileWalker,
    chunker: Chunker,
    output_dir: PathBuf,
    index_filename: String,
}

impl SlicePipeline {
    /// Build a pipeline from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        let walker = FileWalker::from_config(&config.walker)?;
        let output_dir = config.output.dir.clone();
        let index_filename = config.output.index_filename.clone();
        let chunker = Chunker::new(config)?;

        Ok(Self {
            walker,
            chunker,
            output_dir,
            index_filename,
        })
    }

    /// Process a single file or a directory tree, whichever the
    /// path points at.
    pub fn process(&self, path: &Path) -> Result<SliceStats> {
        if path.is_dir() {
            self.process_directory(path)
        } else if path.is_file() {
            let start = Instant::now();
            let records = self.process_file(path)?;
            Ok(self.finish_stats(1, records.len(), start))
        } else {
            Err(SliceError::InvalidPath(format!(
                "Not a file or directory: {}",
                path.display()
            )))
        }
    }

    /// Process every matching file under a directory.
    ///
    /// Errors reading or writing individual files are logged but
    /// don't stop the run.
    pub fn process_directory(&self, root: &Path) -> Result<SliceStats> {
        let start = Instant::now();

        tracing::info!("Starting file collection from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} files to process", files.len());

        let mut files_processed = 0;
        let mut files_skipped = 0;
        let mut chunks_created = 0;

        for (idx, file_path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files processed", idx, files.len());
            }

            match self.process_file(file_path) {
                Ok(records) => {
                    chunks_created += records.len();
                    files_processed += 1;

                    tracing::debug!("Sliced {:?} ({} chunks)", file_path, records.len());
                }
                Err(e) => {
                    tracing::warn!("Failed to process {:?}: {}", file_path, e);
                    files_skipped += 1;
                    // Continue processing other files
                }
            }
        }

        let stats = self.finish_stats(files_processed, chunks_created, start);

        tracing::info!(
            "Slicing complete: {} files processed, {} skipped, {} chunks created in {}ms",
            files_processed,
            files_skipped,
            chunks_created,
            stats.duration_ms
        );

        Ok(stats)
    }

    /// Process a single document: read, chunk, write its index.
    /// Returns the emitted records.
    pub fn process_file(&self, path: &Path) -> Result<Vec<ChunkRecord>> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                SliceError::ProcessingFailed(format!("Skipping non-UTF-8 file: {path:?}"))
            } else {
                SliceError::ProcessingFailed(format!("Failed to read {path:?}: {e}"))
            }
        })?;

        if contents.trim().is_empty() {
            tracing::debug!("Skipping empty file: {:?}", path);
            return Ok(Vec::new());
        }

        let records = self.chunker.records(&contents);
        self.write_index(path, &records)?;

        Ok(records)
    }

    /// Directory that holds one document's chunk index
    pub fn document_dir(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        self.output_dir.join(stem)
    }

    /// Write the chunk index for one document, replacing any
    /// previous run's output for the same document.
    fn write_index(&self, source: &Path, records: &[ChunkRecord]) -> Result<()> {
        let doc_dir = self.document_dir(source);

        // Stale chunk indexes from an earlier run must not survive.
        if doc_dir.exists() {
            fs::remove_dir_all(&doc_dir)?;
        }
        fs::create_dir_all(&doc_dir)?;

        let index_path = doc_dir.join(&self.index_filename);
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&index_path, json)?;

        tracing::debug!("Wrote {} records to {:?}", records.len(), index_path);
        Ok(())
    }

    fn finish_stats(&self, files_processed: usize, chunks_created: usize, start: Instant) -> SliceStats {
        SliceStats {
            files_processed,
            chunks_created,
            duration_ms: start.elapsed().as_millis() as u64,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
