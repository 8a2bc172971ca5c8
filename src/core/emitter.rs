//! Chunk index emission.
//!
//! Converts the final ordered chunk list into serializable
//! records: 1-based ids in document order, an independent image id
//! counter, and a derived, filesystem-safe title per record.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::segment::SegmentDetector;
use crate::core::types::{Chunk, ChunkKind, ChunkRecord, RecordKind};

/// Placeholder label when no usable title can be derived
pub const DEFAULT_LABEL: &str = "untitled";

/// Maximum title length in characters
const MAX_LABEL_CHARS: usize = 30;

/// Markdown markup stripped from heading text
static MARKUP_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#*\[\]]").unwrap());

/// Path-unsafe characters plus residual base64/image-reference
/// substrings, all removed from derived labels.
static UNSAFE_SUBSTRINGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*\x00-\x1f]|data:image/[a-z]+;base64[^\s]*|!\[[^\]]*\]\([^)]*\)"#)
        .unwrap()
});

/// Derive a label from a heading paragraph: markup stripped,
/// sanitized, truncated to 30 characters.
pub(crate) fn heading_label(paragraph: &str) -> String {
    let stripped = MARKUP_CHARS.replace_all(paragraph, "");
    sanitize_label(stripped.trim())
}

/// Remove unsafe substrings and truncate to the label limit. May
/// return an empty string; callers apply the default label.
pub(crate) fn sanitize_label(line: &str) -> String {
    let cleaned = UNSAFE_SUBSTRINGS.replace_all(line, "");
    cleaned.trim().chars().take(MAX_LABEL_CHARS).collect()
}

/// Emits the ordered record list for a finalized chunk list.
pub struct ChunkIndexEmitter<'a> {
    detector: &'a SegmentDetector,
}

impl<'a> ChunkIndexEmitter<'a> {
    pub fn new(detector: &'a SegmentDetector) -> Self {
        Self { detector }
    }

    /// Assign ids and titles in document order. `id` runs 1..n
    /// over all records; `image_id` runs 1..k over image records
    /// only.
    pub fn emit(&self, chunks: Vec<Chunk>) -> Vec<ChunkRecord> {
        let mut records = Vec::with_capacity(chunks.len());
        let mut next_image_id = 1;

        for (i, chunk) in chunks.into_iter().enumerate() {
            let id = i + 1;
            let record = match chunk.kind {
                ChunkKind::TitleMarker => ChunkRecord {
                    id,
                    title: chunk
                        .title
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
                    content: String::new(),
                    is_title: true,
                    kind: RecordKind::Text,
                    image_id: None,
                },
                ChunkKind::Image => {
                    let image_id = next_image_id;
                    next_image_id += 1;
                    ChunkRecord {
                        id,
                        title: self.derive_title(&chunk.content),
                        content: chunk.content,
                        is_title: false,
                        kind: RecordKind::Image,
                        image_id: Some(image_id),
                    }
                }
                ChunkKind::Text => ChunkRecord {
                    id,
                    title: self.derive_title(&chunk.content),
                    content: chunk.content,
                    is_title: false,
                    kind: RecordKind::Text,
                    image_id: None,
                },
            };
            records.push(record);
        }

        records
    }

    /// Title for a non-title chunk: the first line when it looks
    /// like a heading, otherwise the first sanitized characters.
    fn derive_title(&self, content: &str) -> String {
        let first_line = content.lines().next().unwrap_or("").trim();

        let label = if self.detector.is_title(first_line) {
            heading_label(first_line)
        } else {
            sanitize_label(first_line)
        };

        if label.is_empty() {
            DEFAULT_LABEL.to_string()
        } else {
            label
        }
    }
}
