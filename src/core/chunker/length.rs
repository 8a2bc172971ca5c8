//! Fixed-length strategy: sliding character windows.
//!
//! Paragraphs are processed independently, with no cross-paragraph
//! buffering. Title paragraphs emit empty marker chunks; image
//! references stay atomic and are never windowed. Window
//! boundaries always fall on `char_indices()` boundaries, so
//! multi-byte text never gets torn mid-character.

use crate::core::config::LengthConfig;
use crate::core::emitter::heading_label;
use crate::core::segment::{split_paragraphs, SegmentDetector, SegmentKind, SubSegment};
use crate::core::types::Chunk;

pub(crate) fn chunk(text: &str, config: &LengthConfig, detector: &SegmentDetector) -> Vec<Chunk> {
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
                        SubSegment::Text(piece) => {
                            push_windows(&mut chunks, &piece, config);
                        }
                    }
                }
            }
            SegmentKind::Text => {
                push_windows(&mut chunks, paragraph, config);
            }
        }
    }

    chunks
}

/// Slice one text unit into fixed-size windows with backward
/// slide. The final window is clamped to end exactly at the unit
/// end.
fn push_windows(chunks: &mut Vec<Chunk>, text: &str, config: &LengthConfig) {
    let char_indices: Vec<(usize, char)> = text.char_indices().collect();
    if char_indices.is_empty() {
        return;
    }

    let size = config.chunk_size;
    // Slide is bounded to half a window so progress is guaranteed.
    let slide = config.chunk_overlap.min(size / 2);
    let total = char_indices.len();
    let mut start = 0;

    loop {
        let end = (start + size).min(total);
        let byte_start = char_indices[start].0;
        let byte_end = if end < total {
            char_indices[end].0
        } else {
            text.len()
        };
        chunks.push(Chunk::text(text[byte_start..byte_end].to_string()));

        if end >= total {
            break;
        }
        start = end - slide;
    }
}
