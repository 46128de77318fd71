// file: src/parser/sanitizer.rs
// description: normalizes extracted text by repairing encoding artifacts and spacing
// reference: Unicode text handling

use crate::models::{CleanText, RawText};
use crate::parser::patterns::{CAMEL_BOUNDARY, PUNCTUATION_BEFORE_LETTER, WHITESPACE_RUN};
use tracing::debug;

/// Characters left behind by lossy decoding upstream.
const DECODING_ARTIFACTS: [char; 3] = ['\u{FFFD}', '\u{FEFF}', '\0'];

pub struct TextSanitizer;

impl TextSanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Runs the cleanup steps in order. Each step relies on the previous ones.
    pub fn sanitize(&self, raw: &str) -> CleanText {
        if raw.is_empty() {
            return CleanText::default();
        }

        let mut text = self.repair_encoding(raw);
        text = self.split_camel_boundaries(&text);
        text = self.space_after_punctuation(&text);
        text = self.collapse_whitespace(&text);

        debug!(
            raw_chars = raw.chars().count(),
            clean_chars = text.chars().count(),
            "Sanitized text"
        );

        CleanText::from_sanitized(text)
    }

    pub fn sanitize_raw(&self, raw: Option<&RawText>) -> CleanText {
        match raw {
            Some(raw) => self.sanitize(raw.as_str()),
            None => CleanText::default(),
        }
    }

    /// `&str` is already valid UTF-8, so this strips what lossy decoding upstream
    /// leaves behind instead: replacement characters, byte-order marks and NUL.
    fn repair_encoding(&self, text: &str) -> String {
        text.chars()
            .filter(|c| !DECODING_ARTIFACTS.contains(c))
            .collect()
    }

    fn split_camel_boundaries(&self, text: &str) -> String {
        CAMEL_BOUNDARY.replace_all(text, "$1 $2").into_owned()
    }

    fn space_after_punctuation(&self, text: &str) -> String {
        PUNCTUATION_BEFORE_LETTER
            .replace_all(text, "$1 $2")
            .into_owned()
    }

    fn collapse_whitespace(&self, text: &str) -> String {
        WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
    }
}

impl Default for TextSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
