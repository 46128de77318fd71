// file: src/parser/segmenter.rs
// description: punctuation based sentence segmentation over sanitized text

use crate::models::CleanText;
use crate::parser::patterns::SENTENCE_BREAK;

/// Splits after every `.`, `!` or `?` followed by whitespace. The mark stays with
/// its sentence and the whitespace is dropped.
pub fn split_sentences(text: &CleanText) -> Vec<String> {
    let text = text.as_str();
    let mut sentences = Vec::new();
    let mut start = 0;

    for delimiter in SENTENCE_BREAK.find_iter(text) {
        // terminal marks are single-byte ASCII
        let end = delimiter.start() + 1;
        sentences.push(text[start..end].to_string());
        start = delimiter.end();
    }

    if start < text.len() {
        sentences.push(text[start..].to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TextSanitizer;
    use pretty_assertions::assert_eq;

    fn segment(text: &str) -> Vec<String> {
        split_sentences(&TextSanitizer::new().sanitize(text))
    }

    #[test]
    fn test_three_terminal_marks() {
        assert_eq!(segment("A. B! C?"), vec!["A.", "B!", "C?"]);
    }

    #[test]
    fn test_trailing_fragment_kept() {
        assert_eq!(
            segment("First one. Then an unfinished"),
            vec!["First one.", "Then an unfinished"]
        );
    }

    #[test]
    fn test_sanitizer_spacing_enables_split() {
        assert_eq!(segment("Done.Next\nline"), vec!["Done.", "Next line"]);
    }

    #[test]
    fn test_decimal_points_do_not_split() {
        assert_eq!(segment("Version 1.2 shipped. Good."), vec!["Version 1.2 shipped.", "Good."]);
    }

    #[test]
    fn test_empty_text_yields_no_sentences() {
        assert!(split_sentences(&CleanText::default()).is_empty());
    }
}
