// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod summarizer;
pub mod utils;

pub use config::{Config, ExtractionConfig, PreviewConfig, SummaryConfig};
pub use error::{Result, SummarizeError};
pub use exporter::{ExportedReport, JsonExporter};
pub use extractor::{ContentExtractor, PdfExtractor, PlainTextExtractor, WordExtractor};
pub use models::{
    CleanText, Document, DocumentFormat, NO_CONTENT_MESSAGE, RawText, Summary, SummarySections,
};
pub use parser::{TextSanitizer, split_sentences};
pub use pipeline::{DocumentProcessor, ExtractionSpinner, ProcessingReport, ProcessingStats};
pub use summarizer::SummaryComposer;
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _processor = DocumentProcessor::new(config);
        let _composer = SummaryComposer::default();
    }
}
