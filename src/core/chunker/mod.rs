//! Chunk assembly engine.
//!
//! Dispatches exactly one of three strategies per call:
//!
//! - **semantic** (default): paragraph-accumulating running buffer
//!   with structural awareness (titles, images, lists)
//! - **length**: fixed-size character windows per paragraph
//! - **paragraph**: one chunk per paragraph, sentence-packed when
//!   oversized
//!
//! All strategies treat embedded image references as atomic units
//! and emit title paragraphs as empty marker chunks.

pub mod length;
pub mod paragraph;
pub mod semantic;

use crate::core::config::{ChunkMethod, Config};
use crate::core::emitter::ChunkIndexEmitter;
use crate::core::error::Result;
use crate::core::overlap::OverlapInjector;
use crate::core::segment::{char_len, split_sentences, SegmentDetector};
use crate::core::types::{Chunk, ChunkRecord};

/// Chunking engine with patterns compiled once per configuration.
pub struct Chunker {
    config: Config,
    detector: SegmentDetector,
}

impl Chunker {
    /// Validate the configuration and compile its patterns.
    /// Fails fast before any processing starts.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let detector = SegmentDetector::from_config(&config.chunking)?;
        Ok(Self { config, detector })
    }

    /// Engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compiled segment detector
    pub fn detector(&self) -> &SegmentDetector {
        &self.detector
    }

    /// Split a document into ordered chunks using the configured
    /// strategy. Total over its input: an empty or whitespace-only
    /// document yields an empty list.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        match self.config.chunking.method {
            ChunkMethod::Semantic => semantic::chunk(text, &self.config.chunking, &self.detector),
            ChunkMethod::Length => length::chunk(text, &self.config.length, &self.detector),
            ChunkMethod::Paragraph => {
                paragraph::chunk(text, &self.config.paragraph, &self.detector)
            }
        }
    }

    /// Full front door: chunk, inject overlap if enabled, emit the
    /// ordered record list.
    pub fn records(&self, text: &str) -> Vec<ChunkRecord> {
        let mut chunks = self.chunk(text);

        if self.config.chunking.enable_overlap && chunks.len() > 1 {
            chunks = OverlapInjector::new(&self.config.chunking).apply(chunks);
        }

        ChunkIndexEmitter::new(&self.detector).emit(chunks)
    }
}

/// Greedily pack sentences into pieces. A piece is flushed when
/// appending the next sentence would exceed `max_len` and the
/// piece has already reached `min_len` (best-effort: a piece below
/// the minimum keeps absorbing sentences even past the maximum,
/// and a single oversized sentence is never split). Falls back to
/// the original text if no pieces were produced.
pub(crate) fn pack_sentences(text: &str, min_len: usize, max_len: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut buf = String::new();

    for sentence in split_sentences(text) {
        if !buf.is_empty()
            && char_len(&buf) + char_len(&sentence) > max_len
            && char_len(&buf) >= min_len
        {
            pieces.push(std::mem::take(&mut buf));
        }
        buf.push_str(&sentence);
    }

    if !buf.is_empty() {
        pieces.push(buf);
    }

    if pieces.is_empty() {
        // Splitting failure must never lose data.
        vec![text.to_string()]
    } else {
        pieces
    }
}
