//! Paragraph classification and structural break detection.
//!
//! Classifies each paragraph exactly once: image detection takes
//! precedence, title detection second, everything else is plain
//! text. Paragraphs mixing prose with embedded image references
//! are split into alternating text/image sub-segments in their
//! original order.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};
use std::collections::BTreeSet;

use crate::core::config::ChunkingConfig;
use crate::core::error::{Result, SliceError};
use crate::core::segment::paragraph_boundaries;

/// Embedded base64 image reference. Case-insensitive, allows
/// internal newlines inside alt text and payload.
static IMAGE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)!\[.*?\]\(data:image/.*?;base64.*?\)").unwrap());

/// Classification of a paragraph-level segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Structural heading paragraph
    Title,
    /// Paragraph containing one or more embedded image references
    ImagePlaceholder,
    /// Ordinary prose
    Text,
}

/// One piece of a mixed text+image paragraph, in original order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubSegment {
    Text(String),
    Image(String),
}

/// Paragraph classifier with patterns precompiled once per
/// configuration. Reused across all paragraphs of a run; no
/// recompilation in hot loops.
#[derive(Debug)]
pub struct SegmentDetector {
    title_patterns: RegexSet,
    break_patterns: Vec<Regex>,
}

impl SegmentDetector {
    /// Compile the configured title and break patterns.
    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        let title_patterns = RegexSet::new(&config.title_patterns).map_err(|e| {
            SliceError::InvalidConfig(format!("Invalid title pattern: {e}"))
        })?;

        let break_patterns = config
            .break_patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    SliceError::InvalidConfig(format!("Invalid break pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title_patterns,
            break_patterns,
        })
    }

    /// Classify a trimmed paragraph. Exclusive: image detection
    /// takes precedence over title detection.
    pub fn classify(&self, paragraph: &str) -> SegmentKind {
        if self.contains_image(paragraph) {
            SegmentKind::ImagePlaceholder
        } else if self.is_title(paragraph) {
            SegmentKind::Title
        } else {
            SegmentKind::Text
        }
    }

    /// Whether the paragraph contains at least one embedded image
    /// reference.
    pub fn contains_image(&self, paragraph: &str) -> bool {
        IMAGE_REF.is_match(paragraph)
    }

    /// Whether the paragraph is exactly one complete image
    /// reference and nothing else.
    pub fn is_single_image(&self, paragraph: &str) -> bool {
        match IMAGE_REF.find(paragraph.trim()) {
            Some(m) => m.start() == 0 && m.end() == paragraph.trim().len(),
            None => false,
        }
    }

    /// Whether the entire trimmed paragraph matches one of the
    /// configured title patterns.
    pub fn is_title(&self, paragraph: &str) -> bool {
        self.title_patterns.is_match(paragraph.trim())
    }

    /// Split a paragraph on image references, keeping the
    /// delimiters. Yields alternating text/image sub-segments in
    /// original order; pure-text paragraphs come back as a single
    /// text sub-segment.
    pub fn split_mixed(&self, paragraph: &str) -> Vec<SubSegment> {
        let mut parts = Vec::new();
        let mut last = 0;

        for m in IMAGE_REF.find_iter(paragraph) {
            let before = paragraph[last..m.start()].trim();
            if !before.is_empty() {
                parts.push(SubSegment::Text(before.to_string()));
            }
            parts.push(SubSegment::Image(m.as_str().to_string()));
            last = m.end();
        }

        let after = paragraph[last..].trim();
        if !after.is_empty() {
            parts.push(SubSegment::Text(after.to_string()));
        }

        parts
    }

    /// Candidate structural cut positions (byte offsets) for the
    /// whole document: configured break patterns plus blank-line
    /// paragraph boundaries, with the start and end of the text
    /// always included. Candidates only, not classifications.
    pub fn break_points(&self, text: &str) -> Vec<usize> {
        let mut points = BTreeSet::new();
        points.insert(0);

        for pattern in &self.break_patterns {
            for m in pattern.find_iter(text) {
                // Skip the leading newline the patterns anchor on.
                points.insert((m.start() + 1).min(text.len()));
            }
        }

        for end in paragraph_boundaries(text) {
            points.insert(end);
        }

        points.insert(text.len());
        points.into_iter().collect()
    }
}
