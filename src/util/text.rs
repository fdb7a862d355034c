// src/util/text.rs

/// Cut `text` down to at most `limit` characters.
///
/// Counts chars, not bytes, so multi-byte text is never split mid-codepoint.
///
/// # Examples
///
/// ```
/// use notesync::util::text::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
/// assert_eq!(truncate_chars("short", 300), "short");
/// ```
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Apply an optional limit; `None` leaves the text untouched
pub fn apply_limit(text: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) => truncate_chars(text, limit),
        None => text.to_string(),
    }
}

/// First line of `text`, shortened for one-line listings
pub fn first_line(text: &str, max_chars: usize) -> String {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.chars().count() > max_chars {
        format!("{}...", truncate_chars(line, max_chars))
    } else {
        line.to_string()
    }
}
