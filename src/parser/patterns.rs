// file: src/parser/patterns.rs
// description: compiled regex patterns for text cleanup and sentence segmentation
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Lowercase letter glued to an uppercase one, e.g. "endNext"
    pub static ref CAMEL_BOUNDARY: Regex = Regex::new(
        r"(\p{Ll})(\p{Lu})"
    ).expect("CAMEL_BOUNDARY regex is valid");

    pub static ref PUNCTUATION_BEFORE_LETTER: Regex = Regex::new(
        r"([.,!?])(\p{L})"
    ).expect("PUNCTUATION_BEFORE_LETTER regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");

    // Terminal mark plus the whitespace consumed as delimiter
    pub static ref SENTENCE_BREAK: Regex = Regex::new(
        r"[.!?]\s+"
    ).expect("SENTENCE_BREAK regex is valid");
}
