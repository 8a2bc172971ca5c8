//! Neighbor overlap injection.
//!
//! Post-processes a finalized chunk list so that text chunks carry
//! bounded context from their immediate neighbors: a prefix pulled
//! from the end of the previous chunk and a suffix pulled from the
//! start of the next one. Chunk count and order never change, and
//! marker/image chunks keep their own content untouched (they can
//! still serve as overlap sources for adjacent text chunks).

use crate::core::config::ChunkingConfig;
use crate::core::segment::char_len;
use crate::core::types::{Chunk, ChunkKind};

/// Separator between injected overlap and the chunk body
const OVERLAP_SEPARATOR: &str = "\n\n";

/// Injects bounded neighbor context into text chunks.
pub struct OverlapInjector {
    min_length: usize,
    max_length: usize,
}

impl OverlapInjector {
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            min_length: config.overlap_min_length,
            max_length: config.overlap_max_length,
        }
    }

    /// Return a list of the same length and order where each text
    /// chunk gains neighbor context. The first chunk gains only a
    /// suffix, the last only a prefix. A side is skipped when the
    /// chunk already contains that exact text at its boundary
    /// region, which makes a second application a no-op.
    pub fn apply(&self, chunks: Vec<Chunk>) -> Vec<Chunk> {
        if chunks.len() <= 1 {
            return chunks;
        }

        let count = chunks.len();
        let mut overlapped = Vec::with_capacity(count);

        for i in 0..count {
            let chunk = &chunks[i];
            if chunk.kind != ChunkKind::Text {
                overlapped.push(chunk.clone());
                continue;
            }

            let mut content = chunk.content.clone();

            if i > 0 {
                let prefix = self.tail_of(&chunks[i - 1].content);
                if self.should_inject(&content, &prefix) {
                    content = format!("{prefix}{OVERLAP_SEPARATOR}{content}");
                }
            }

            if i + 1 < count {
                let suffix = self.head_of(&chunks[i + 1].content);
                if self.should_inject(&content, &suffix) {
                    content = format!("{content}{OVERLAP_SEPARATOR}{suffix}");
                }
            }

            overlapped.push(Chunk {
                kind: ChunkKind::Text,
                content,
                title: chunk.title.clone(),
            });
        }

        overlapped
    }

    /// Overlap length for a neighbor of `available` characters:
    /// at most `max_length`, raised toward `min_length` when the
    /// neighbor allows, never beyond what is available.
    fn overlap_len(&self, available: usize) -> usize {
        let len = self.max_length.min(available);
        if len < self.min_length {
            self.min_length.min(available)
        } else {
            len
        }
    }

    /// Last N characters of the previous chunk.
    fn tail_of(&self, source: &str) -> String {
        let total = char_len(source);
        let take = self.overlap_len(total);
        source.chars().skip(total - take).collect::<String>().trim().to_string()
    }

    /// First N characters of the next chunk.
    fn head_of(&self, source: &str) -> String {
        let take = self.overlap_len(char_len(source));
        source.chars().take(take).collect::<String>().trim().to_string()
    }

    /// Inject only non-empty overlap the chunk does not already
    /// carry. The containment check is what makes re-application
    /// idempotent.
    fn should_inject(&self, content: &str, overlap: &str) -> bool {
        !overlap.is_empty() && !content.contains(overlap)
    }
}
