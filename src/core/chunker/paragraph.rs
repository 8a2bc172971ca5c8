//! Paragraph strategy: one chunk per paragraph.
//!
//! A paragraph becomes exactly one chunk unless it exceeds the
//! configured cap, in which case sentences are greedily packed
//! into sub-chunks (a sentence never straddles two sub-chunks).
//! Title paragraphs emit empty marker chunks; image references
//! stay atomic.

use crate::core::chunker::pack_sentences;
use crate::core::config::ParagraphConfig;
use crate::core::emitter::heading_label;
use crate::core::segment::{char_len, split_paragraphs, SegmentDetector, SegmentKind, SubSegment};
use crate::core::types::Chunk;

pub(crate) fn chunk(
    text: &str,
    config: &ParagraphConfig,
    detector: &SegmentDetector,
) -> Vec<Chunk> {
    let max = config.max_chunk_size;
    let mut chunks = Vec::new();

    for paragraph in split_paragraphs(text) {
        match detector.classify(paragraph) {
            SegmentKind::Title => {
                chunks.push(Chunk::title_marker(heading_label(paragraph)));
            }
            SegmentKind::ImagePlaceholder => {
                for part in detector.split_mixed(paragraph) {
                    match part {
                        SubSegment::Image(reference) => chunks.push(Chunk::image(reference)),
                        SubSegment::Text(piece) => push_text(&mut chunks, &piece, max),
                    }
                }
            }
            SegmentKind::Text => push_text(&mut chunks, paragraph, max),
        }
    }

    chunks
}

fn push_text(chunks: &mut Vec<Chunk>, text: &str, max: usize) {
    if char_len(text) <= max {
        chunks.push(Chunk::text(text.to_string()));
    } else {
        for piece in pack_sentences(text, 0, max) {
            chunks.push(Chunk::text(piece));
        }
    }
}
