// file: src/extractor/mod.rs
// description: content extraction dispatch over the supported document formats
// reference: internal module structure

pub mod pdf;
pub mod text;
pub mod word;

pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;
pub use word::WordExtractor;

use crate::error::Result;
use crate::models::{Document, DocumentFormat, RawText};
use tracing::debug;

#[derive(Default)]
pub struct ContentExtractor {
    pdf: PdfExtractor,
    word: WordExtractor,
    text: PlainTextExtractor,
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extract(&self, document: &Document) -> Result<RawText> {
        debug!(
            name = %document.name,
            format = %document.format,
            bytes = document.size(),
            "Extracting text"
        );

        match document.format {
            DocumentFormat::Pdf => self.pdf.extract(&document.bytes),
            DocumentFormat::Word => self.word.extract(&document.bytes),
            DocumentFormat::PlainText => self.text.extract(&document.bytes),
        }
    }
}
