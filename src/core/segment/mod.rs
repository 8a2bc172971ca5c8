//! Input segmentation.
//!
//! Splits raw document text into paragraph-level segments and
//! classifies them prior to chunk assembly. Key features:
//!
//! - Blank-line paragraph splitting
//! - Title / image-placeholder / text classification
//! - Mixed text+image paragraph sub-segmentation
//! - Sentence-boundary splitting (last-resort granularity)
//!
//! # Safety
//!
//! All length arithmetic in the engine counts Unicode scalar
//! values, never bytes. Slicing only happens at `char_indices()`
//! boundaries, so multi-byte CJK text and emoji never cause
//! panics or skewed bounds.

pub mod detector;
pub mod sentence;

pub use detector::{SegmentDetector, SegmentKind, SubSegment};
pub use sentence::split_sentences;

use once_cell::sync::Lazy;
use regex::Regex;

/// Blank-line paragraph boundary
static PARAGRAPH_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Length of `s` in Unicode scalar values.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split text into trimmed, non-empty paragraphs on blank-line
/// boundaries.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Iterator over blank-line boundary matches (used for break-point
/// detection).
pub(crate) fn paragraph_boundaries(text: &str) -> impl Iterator<Item = usize> + '_ {
    PARAGRAPH_BOUNDARY.find_iter(text).map(|m| m.end())
}
