// file: src/extractor/text.rs
// description: strict UTF-8 decoding for plain text uploads

use crate::error::{Result, SummarizeError};
use crate::models::RawText;

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Unlike the container formats, bad bytes here are an error rather than
    /// something the sanitizer silently drops.
    pub fn extract(&self, bytes: &[u8]) -> Result<RawText> {
        let text = std::str::from_utf8(bytes).map_err(|e| SummarizeError::Decode(e.to_string()))?;
        Ok(RawText::new(text))
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        let raw = PlainTextExtractor::new().extract("naïve text\n".as_bytes()).unwrap();
        assert_eq!(raw.as_str(), "naïve text\n");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = PlainTextExtractor::new().extract(b"abc\xff").unwrap_err();
        assert!(matches!(err, SummarizeError::Decode(_)));
    }
}
