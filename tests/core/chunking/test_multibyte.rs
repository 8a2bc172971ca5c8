// UTF-8 safety tests: multibyte character handling
//
// All length arithmetic is defined over Unicode scalar counts, so
// CJK-heavy documents must chunk by character count, not byte
// count, and window boundaries must never tear a code point.

use crate::common::{length_chunker, paragraph_chunker, semantic_chunker};
use mdslice::core::types::RecordKind;

#[test]
fn test_cjk_paragraph_counted_in_chars() {
    // 120 CJK chars are 360 bytes; with max 150 chars the
    // paragraph must stay whole.
    let doc = "数".repeat(120);
    let records = semantic_chunker(10, 150).records(&doc);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content, doc);
}

#[test]
fn test_mixed_cjk_latin_lengths() {
    // 70 Latin + joiner + 70 CJK = 141 chars but 281 bytes. A
    // 150-char bound keeps it in one chunk.
    let doc = format!("{}{}{}", "a".repeat(70), " ", "中".repeat(70));
    let records = semantic_chunker(10, 150).records(&doc);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content.chars().count(), 141);
}

#[test]
fn test_cjk_sentence_terminators() {
    let doc = format!("{}。{}！{}？", "一".repeat(60), "二".repeat(60), "三".repeat(60));
    let records = semantic_chunker(10, 100).records(&doc);

    assert!(records.len() > 1);
    for record in &records {
        assert!(record.content.chars().count() <= 100);
        // No sentence torn: every piece ends on CJK punctuation.
        let last = record.content.chars().last().unwrap();
        assert!(matches!(last, '。' | '！' | '？'));
    }
}

#[test]
fn test_length_windows_on_char_boundaries() {
    let doc = "русский текст ".repeat(20);
    let records = length_chunker(50, 10).records(doc.trim());

    for record in &records {
        // Slicing on a byte boundary inside a 2-byte char would
        // have panicked during chunking; also sanity-check the
        // window size in characters.
        assert!(record.content.chars().count() <= 50);
    }
}

#[test]
fn test_emoji_survive_chunking() {
    let doc = format!(
        "Status update 🚀 with emoji content here.\n\n{} 🔥",
        "More emoji text follows the break."
    );
    let records = paragraph_chunker(500).records(&doc);

    let all_text: String = records
        .iter()
        .filter(|r| r.kind == RecordKind::Text)
        .map(|r| r.content.as_str())
        .collect();
    assert!(all_text.contains('🚀'));
    assert!(all_text.contains('🔥'));
}

#[test]
fn test_cjk_title_truncation() {
    let heading = format!("# {}", "标".repeat(50));
    let records = semantic_chunker(10, 150).records(&heading);

    assert!(records[0].is_title);
    assert_eq!(records[0].title.chars().count(), 30);
}
