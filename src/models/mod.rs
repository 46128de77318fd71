// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod summary;
pub mod text;

pub use document::{Document, DocumentFormat};
pub use summary::{NO_CONTENT_MESSAGE, Summary, SummarySections};
pub use text::{CleanText, RawText};
