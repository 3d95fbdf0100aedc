// src/utils/text.rs

//! Text shaping for card fields.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Appended when a description is cut short.
pub const ELLIPSIS: &str = "...";

static INVALID_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("static pattern"));

/// Truncate to at most `max_chars` user-perceived characters, preferring
/// to break on a word boundary.
///
/// Returns the text and whether truncation happened; the ellipsis is only
/// appended in that case.
pub fn truncate_words(text: &str, max_chars: usize) -> (Cow<'_, str>, bool) {
    let text = text.trim();
    let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
    if graphemes.len() <= max_chars {
        return (Cow::Borrowed(text), false);
    }

    let cut = graphemes
        .get(max_chars)
        .map(|(idx, _)| *idx)
        .unwrap_or(text.len());

    // Largest word boundary inside the budget that still leaves some text.
    let boundary = text
        .split_word_bound_indices()
        .map(|(idx, _)| idx)
        .take_while(|idx| *idx <= cut)
        .filter(|idx| *idx > 0)
        .last()
        .unwrap_or(cut);

    let mut kept = text[..boundary].trim_end();
    if kept.is_empty() {
        kept = text[..cut].trim_end();
    }
    let kept = kept.trim_end_matches([',', ';', ':', '-']);

    (Cow::Owned(format!("{kept}{ELLIPSIS}")), true)
}

/// Case-insensitive tag comparison using full Unicode lowercasing.
pub fn same_tag(a: &str, b: &str) -> bool {
    a.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .eq(b.trim().chars().flat_map(char::to_lowercase))
}

/// Uppercase the first character.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a DOM-safe identifier from a prefix and a record id.
///
/// Runs of characters outside `[A-Za-z0-9_-]` become a single `_`.
pub fn dom_id(prefix: &str, raw: &str) -> String {
    let cleaned = INVALID_ID_CHARS.replace_all(raw.trim(), "_");
    format!("{prefix}{cleaned}")
}

/// Split text on line breaks into trimmed, non-empty paragraphs.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
