//! Small text and time helpers shared by the output renderers.

use chrono::{DateTime, Utc};

/// Render an ISO-8601 publication time as `"Mar 1, 2025 · 12:00 PM UTC"`.
///
/// Unparseable input is returned unchanged rather than dropped, so a
/// provider quirk never hides an article.
pub fn format_published(published_at: &str) -> String {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%b %-d, %Y · %-I:%M %p UTC")
            .to_string(),
        Err(_) => published_at.to_string(),
    }
}

/// Shorten text to at most `max` characters on a character boundary,
/// appending an ellipsis when anything was cut.
pub fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_published() {
        assert_eq!(
            format_published("2025-03-01T12:00:00Z"),
            "Mar 1, 2025 · 12:00 PM UTC"
        );
        assert_eq!(
            format_published("2025-03-01T09:05:00+02:00"),
            "Mar 1, 2025 · 7:05 AM UTC"
        );
    }

    #[test]
    fn test_format_published_passes_through_garbage() {
        assert_eq!(format_published("yesterday"), "yesterday");
    }

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("  Short text ", 50), "Short text");
    }

    #[test]
    fn test_excerpt_cuts_on_char_boundary() {
        assert_eq!(excerpt("héllo wörld", 6), "héllo…");
        assert_eq!(excerpt("abcdef", 6), "abcdef");
        assert_eq!(excerpt("abcdefg", 6), "abcdef…");
    }
}
