//! Core data types for the mdslice chunking engine.
//!
//! This module defines the data structures shared across the
//! engine: in-flight chunks, serializable chunk records, and
//! pipeline statistics.

use serde::{Deserialize, Serialize};

/// Kind of an assembled chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// Ordinary prose content
    Text,

    /// Exactly one embedded base64 image reference
    Image,

    /// A structural heading; content is always empty
    TitleMarker,
}

/// A single chunk in document order, prior to record emission.
///
/// `content` holds the chunk body (empty for title markers).
/// `title` is only pre-populated for title markers, where the
/// heading text is recorded as metadata rather than content.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub kind: ChunkKind,
    pub content: String,
    pub title: Option<String>,
}

impl Chunk {
    /// Create a text chunk
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: ChunkKind::Text,
            content: content.into(),
            title: None,
        }
    }

    /// Create an image chunk holding one complete image reference
    pub fn image(reference: impl Into<String>) -> Self {
        Self {
            kind: ChunkKind::Image,
            content: reference.into(),
            title: None,
        }
    }

    /// Create a title marker with empty content
    pub fn title_marker(title: impl Into<String>) -> Self {
        Self {
            kind: ChunkKind::TitleMarker,
            content: String::new(),
            title: Some(title.into()),
        }
    }
}

/// Serialized record type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Text,
    Image,
}

/// Serializable projection of a chunk, in final document order.
///
/// `id` is the 1-based position in the emitted index. `image_id`
/// is an independent 1-based counter over image records only and
/// is the join key against an externally-maintained payload table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// 1-based monotonic sequence number in final order
    pub id: usize,

    /// Derived label, at most 30 characters, path-safe
    pub title: String,

    /// Chunk body (empty for title markers)
    pub content: String,

    /// Whether this record represents a structural heading
    pub is_title: bool,

    /// Record type: "text" or "image"
    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// Present only for image records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<usize>,
}

/// Statistics from a slicing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceStats {
    /// Number of files successfully processed
    pub files_processed: usize,

    /// Total chunk records emitted
    pub chunks_created: usize,

    /// Processing duration in milliseconds
    pub duration_ms: u64,

    /// Run timestamp (RFC 3339)
    pub generated_at: String,
}
