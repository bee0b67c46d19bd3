//! Derived post fields - excerpt, reading time, and tag normalization.
//!
//! Pure functions. The store recomputes all of these on every write, so the
//! stored values are always a function of the current `content` and tag
//! input, never hand-set and never stale.

const EXCERPT_LIMIT: usize = 150;
const WORDS_PER_MINUTE: u32 = 200;

/// Markup-stripped preview of the content.
///
/// Strips the markdown control characters, trims, and truncates to exactly
/// 150 characters plus an ellipsis marker when longer. Truncation counts
/// characters, not words - it may cut mid-word.
pub fn excerpt(content: &str) -> String {
    let plain: String = content
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`' | '[' | ']' | '(' | ')'))
        .collect();
    let plain = plain.trim();
    if plain.chars().count() > EXCERPT_LIMIT {
        let mut cut: String = plain.chars().take(EXCERPT_LIMIT).collect();
        cut.push_str("...");
        cut
    } else {
        plain.to_owned()
    }
}

/// Estimated minutes to read at a fixed 200 words per minute, minimum 1.
///
/// Empty or whitespace-only content counts as one word so the estimate
/// never reaches zero.
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count().max(1) as u32;
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Split a comma-separated tag string into individual tags.
///
/// Each piece is trimmed and empty pieces are dropped; order and duplicates
/// are preserved.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
