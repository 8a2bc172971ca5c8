//! Sentence-boundary splitting.
//!
//! Fallback unit used by every strategy when a paragraph alone
//! exceeds the maximum chunk size. Handles both Latin and CJK
//! terminal punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more sentence-terminal punctuation marks (Latin + CJK)
static SENTENCE_TERMINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?。！？]+").unwrap());

/// Split text on sentence-terminal punctuation, keeping the
/// punctuation attached to the preceding sentence. Empty fragments
/// are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last = 0;

    for m in SENTENCE_TERMINAL.find_iter(text) {
        let sentence = text[last..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        last = m.end();
    }

    // Unterminated tail
    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
