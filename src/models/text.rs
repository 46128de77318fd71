// file: src/models/text.rs
// description: raw and sanitized text wrappers passed between pipeline stages

use serde::Serialize;
use std::fmt;

/// Text as it came out of a format handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText(String);

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Sanitized text. Only the sanitizer constructs it: single spaces between
/// tokens, no surrounding whitespace, a space after punctuation before a letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CleanText(String);

impl CleanText {
    pub(crate) fn from_sanitized(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// First `max_chars` characters, cut on a char boundary.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.0.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for CleanText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = CleanText::from_sanitized("héllo wörld".to_string());
        assert_eq!(text.preview(2), "hé");
        assert_eq!(text.preview(7), "héllo w");
        assert_eq!(text.preview(100), "héllo wörld");
    }

    #[test]
    fn test_empty_texts() {
        assert_eq!(RawText::default().char_count(), 0);
        assert_eq!(CleanText::default().preview(10), "");
    }
}
