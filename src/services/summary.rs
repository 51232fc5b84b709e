/// Returned when extraction produced nothing but whitespace
pub const NO_TEXT_FALLBACK: &str = "No text detected.";

/// Default summary length in characters
pub const DEFAULT_SUMMARY_LENGTH: usize = 800;

/// Returns the first `max_chars` characters of the extracted text as-is.
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
/// Whitespace-only text counts as empty.
pub fn summarize(text: &str, max_chars: usize) -> String {
    if text.trim().is_empty() {
        return NO_TEXT_FALLBACK.to_string();
    }

    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
