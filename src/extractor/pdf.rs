// file: src/extractor/pdf.rs
// description: page by page text extraction from PDF containers
// reference: https://docs.rs/lopdf

use crate::error::{Result, SummarizeError};
use crate::models::{DocumentFormat, RawText};
use lopdf::Document as PdfDocument;
use tracing::{debug, info};

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Concatenates page text in page order. Pages without extractable text
    /// (scanned images, unsupported fonts) add nothing; any non-empty page text,
    /// whitespace included, is kept so words never merge across pages.
    pub fn extract(&self, bytes: &[u8]) -> Result<RawText> {
        let doc = PdfDocument::load_mem(bytes).map_err(|e| {
            SummarizeError::extraction(DocumentFormat::Pdf, format!("failed to parse PDF: {e}"))
        })?;

        let pages = doc.get_pages();
        let mut text = String::new();
        let mut empty_pages = 0usize;

        for page_number in pages.keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(page_text) if !page_text.is_empty() => text.push_str(&page_text),
                Ok(_) => {
                    empty_pages += 1;
                    debug!(page_number, "Page has no extractable text");
                }
                Err(e) => {
                    empty_pages += 1;
                    debug!(page_number, error = %e, "Skipping unreadable page");
                }
            }
        }

        info!(
            page_count = pages.len(),
            empty_pages, "PDF text extraction complete"
        );

        Ok(RawText::new(text))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
