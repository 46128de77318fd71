// file: src/parser/mod.rs
// description: text cleanup and segmentation module exports
// reference: internal module structure

pub mod patterns;
pub mod sanitizer;
pub mod segmenter;

pub use sanitizer::TextSanitizer;
pub use segmenter::split_sentences;
