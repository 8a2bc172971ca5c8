//! Semantic strategy: paragraph-accumulating running buffer.
//!
//! Iterates paragraphs in document order, accumulating prose into
//! a running buffer that is flushed on structural events (titles,
//! images) or when the length bounds demand it. The tie-break when
//! a below-minimum buffer would overflow the maximum is to merge
//! anyway and force-split afterwards: undersized chunks are
//! considered worse than a deferred bound enforcement.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::chunker::pack_sentences;
use crate::core::config::ChunkingConfig;
use crate::core::emitter::heading_label;
use crate::core::segment::{
    char_len, split_paragraphs, split_sentences, SegmentDetector, SegmentKind, SubSegment,
};
use crate::core::types::{Chunk, ChunkKind};

/// Unordered (`*`, `-`, `+`) or ordered (`N.`) list item start
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([*\-+]\s|\d+\.\s)").unwrap());

pub(crate) fn chunk(text: &str, config: &ChunkingConfig, detector: &SegmentDetector) -> Vec<Chunk> {
    let min = config.chunk_min_length;
    let max = config.chunk_max_length;

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut buf = String::new();

    for paragraph in split_paragraphs(text) {
        match detector.classify(paragraph) {
            SegmentKind::ImagePlaceholder => {
                flush(&mut chunks, &mut buf);
                emit_mixed(&mut chunks, detector.split_mixed(paragraph), min, max);
            }
            SegmentKind::Title => {
                flush(&mut chunks, &mut buf);
                chunks.push(Chunk::title_marker(heading_label(paragraph)));
            }
            SegmentKind::Text => {
                accumulate(&mut chunks, &mut buf, paragraph, min, max);
            }
        }
    }
    flush(&mut chunks, &mut buf);

    // Final pass: enforce the max bound on anything the merge
    // tie-break let through.
    let mut finals = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        if chunk.kind == ChunkKind::Text && char_len(&chunk.content) > max {
            for piece in split_long_chunk(&chunk.content, min, max) {
                finals.push(Chunk::text(piece));
            }
        } else {
            finals.push(chunk);
        }
    }
    finals
}

/// Append one plain paragraph to the running buffer. A buffer
/// that has reached the minimum is flushed first; a buffer still
/// below the minimum absorbs the paragraph even when that
/// overflows the maximum (undersized chunks are worse), and the
/// overflow is force-split right away.
fn accumulate(chunks: &mut Vec<Chunk>, buf: &mut String, paragraph: &str, min: usize, max: usize) {
    if !buf.is_empty() && char_len(buf) >= min {
        flush(chunks, buf);
    }

    append_paragraph(buf, paragraph);

    if char_len(buf) > max {
        if LIST_ITEM.is_match(paragraph) {
            // Flush list content whole to keep the list intact.
            flush(chunks, buf);
        } else {
            force_split(chunks, buf, max);
        }
    }
}

/// Emit the sub-segments of a mixed text/image paragraph in their
/// original order. Images are atomic; text pieces are re-chunked
/// against the max bound.
fn emit_mixed(chunks: &mut Vec<Chunk>, parts: Vec<SubSegment>, min: usize, max: usize) {
    for part in parts {
        match part {
            SubSegment::Image(reference) => chunks.push(Chunk::image(reference)),
            SubSegment::Text(text) => {
                if char_len(&text) <= max {
                    chunks.push(Chunk::text(text));
                } else {
                    for piece in pack_sentences(&text, min, max) {
                        chunks.push(Chunk::text(piece));
                    }
                }
            }
        }
    }
}

/// Force-split an overflowing buffer at sentence boundaries.
/// Completed sub-chunks are emitted; the unflushed tail stays in
/// the running buffer and keeps accumulating.
fn force_split(chunks: &mut Vec<Chunk>, buf: &mut String, max: usize) {
    let mut acc = String::new();
    for sentence in split_sentences(buf) {
        if !acc.is_empty() && char_len(&acc) + char_len(&sentence) > max {
            chunks.push(Chunk::text(std::mem::take(&mut acc)));
        }
        acc.push_str(&sentence);
    }
    *buf = acc;
}

/// Flush the running buffer as a text chunk if it has content.
fn flush(chunks: &mut Vec<Chunk>, buf: &mut String) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        chunks.push(Chunk::text(trimmed.to_string()));
    }
    buf.clear();
}

/// Split an over-long chunk by paragraph, falling back to sentence
/// packing. A split that produces nothing re-emits the original
/// unit: data loss is never acceptable.
fn split_long_chunk(content: &str, min: usize, max: usize) -> Vec<String> {
    let mut grouped = Vec::new();
    let mut buf = String::new();

    for paragraph in split_paragraphs(content) {
        if !buf.is_empty()
            && char_len(&buf) + char_len(paragraph) > max
            && char_len(&buf) >= min
        {
            grouped.push(std::mem::take(&mut buf));
        }
        append_paragraph(&mut buf, paragraph);
    }
    if !buf.is_empty() {
        grouped.push(buf);
    }

    let mut pieces = Vec::with_capacity(grouped.len());
    for group in grouped {
        if char_len(&group) <= max {
            pieces.push(group);
        } else {
            pieces.extend(pack_sentences(&group, min, max));
        }
    }

    if pieces.is_empty() {
        vec![content.to_string()]
    } else {
        pieces
    }
}

fn append_paragraph(buf: &mut String, paragraph: &str) {
    if buf.is_empty() {
        buf.push_str(paragraph);
    } else {
        buf.push_str("\n\n");
        buf.push_str(paragraph);
    }
}
