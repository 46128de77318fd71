// file: src/pipeline/processor.rs
// description: runs one uploaded document through extraction, sanitization and summary composition
// reference: linear upload, extract, clean, slice, render workflow

use crate::config::Config;
use crate::error::{Result, SummarizeError};
use crate::extractor::ContentExtractor;
use crate::models::{CleanText, Document, DocumentFormat, Summary};
use crate::parser::{TextSanitizer, split_sentences};
use crate::pipeline::progress::ProcessingStats;
use crate::summarizer::SummaryComposer;
use crate::utils::Validator;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct ProcessingReport {
    pub document_name: String,
    pub format: Option<DocumentFormat>,
    pub content_hash: Option<String>,
    pub preview: String,
    pub summary: Option<Summary>,
    /// User-facing message when the upload was rejected but recovered from.
    pub notice: Option<String>,
    pub stats: ProcessingStats,
    #[serde(skip)]
    pub clean_text: CleanText,
}

impl ProcessingReport {
    fn rejected(document_name: String, notice: String) -> Self {
        Self {
            document_name,
            format: None,
            content_hash: None,
            preview: String::new(),
            summary: None,
            notice: Some(notice),
            stats: ProcessingStats::new(),
            clean_text: CleanText::default(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.notice.is_some()
    }
}

pub struct DocumentProcessor {
    config: Config,
    extractor: ContentExtractor,
    sanitizer: TextSanitizer,
    composer: SummaryComposer,
}

impl DocumentProcessor {
    pub fn new(config: Config) -> Self {
        let composer = SummaryComposer::new(config.summary.clone());

        Self {
            config,
            extractor: ContentExtractor::new(),
            sanitizer: TextSanitizer::new(),
            composer,
        }
    }

    pub fn process_path(&self, path: &Path, summarize: bool) -> Result<ProcessingReport> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        // extension decides the handler before any bytes are read
        if let Err(err @ SummarizeError::UnsupportedFormat(_)) = DocumentFormat::from_path(path) {
            warn!("Rejected {}: {}", name, err);
            return Ok(ProcessingReport::rejected(name, err.to_string()));
        }

        Validator::validate_file_path(path)?;
        let size = fs::metadata(path)
            .map_err(|e| SummarizeError::Validation(format!("Cannot stat {}: {}", path.display(), e)))?
            .len();
        Validator::validate_file_size(size, self.config.max_file_size_bytes())?;

        let bytes = fs::read(path)?;
        self.process(name, bytes, summarize)
    }

    /// Processes an in-memory upload. An unsupported extension is recovered into
    /// a report with an empty extraction result and a notice; other failures
    /// propagate.
    pub fn process(&self, name: String, bytes: Vec<u8>, summarize: bool) -> Result<ProcessingReport> {
        let document = match Document::from_upload(name.clone(), bytes) {
            Ok(document) => document,
            Err(err @ SummarizeError::UnsupportedFormat(_)) => {
                warn!("Rejected {}: {}", name, err);
                return Ok(ProcessingReport::rejected(name, err.to_string()));
            }
            Err(err) => return Err(err),
        };

        Validator::validate_file_size(document.size(), self.config.max_file_size_bytes())?;
        self.process_document(&document, summarize)
    }

    pub fn process_document(&self, document: &Document, summarize: bool) -> Result<ProcessingReport> {
        let start = Instant::now();

        let raw = self.extractor.extract(document)?;
        let clean_text = self.sanitizer.sanitize_raw(Some(&raw));

        let mut report = ProcessingReport {
            document_name: document.name.clone(),
            format: Some(document.format),
            content_hash: Some(document.content_hash.clone()),
            preview: clean_text.preview(self.config.preview.max_chars).to_string(),
            summary: None,
            notice: None,
            stats: ProcessingStats {
                bytes_read: document.size(),
                raw_chars: raw.char_count(),
                clean_chars: clean_text.char_count(),
                ..ProcessingStats::new()
            },
            clean_text,
        };

        if summarize {
            self.summarize(&mut report);
        }

        report.stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Processed {} ({}, {} chars, {} ms)",
            report.document_name,
            document.format,
            report.stats.clean_chars,
            report.stats.duration_ms
        );

        Ok(report)
    }

    /// Composes the summary for an already extracted report, on explicit request.
    pub fn summarize(&self, report: &mut ProcessingReport) {
        report.stats.sentence_count = split_sentences(&report.clean_text).len();
        report.summary = Some(self.composer.compose(&report.clean_text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn processor() -> DocumentProcessor {
        DocumentProcessor::new(Config::default_config())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_plain_text() {
        let text = "Hello world. This is a test. More text here. Even more. Final line. Last one.";
        let report = processor()
            .process("notes.txt".to_string(), text.as_bytes().to_vec(), true)
            .unwrap();

        let summary = report.summary.as_ref().unwrap();
        let sections = summary.sections().unwrap();

        assert_eq!(sections.introduction, strings(&["Hello world.", "This is a test."]));
        assert_eq!(
            sections.key_points,
            strings(&["More text here.", "Even more.", "Final line.", "Last one."])
        );
        assert_eq!(sections.conclusion, strings(&["Final line.", "Last one."]));
        assert_eq!(report.stats.sentence_count, 6);
        assert_eq!(report.format, Some(DocumentFormat::PlainText));
    }

    #[test]
    fn test_unsupported_format_yields_empty_result() {
        let report = processor()
            .process("slides.pptx".to_string(), b"whatever".to_vec(), true)
            .unwrap();

        assert!(report.is_rejected());
        assert!(report.clean_text.is_empty());
        assert!(report.preview.is_empty());
        assert!(report.summary.is_none());
        assert!(report.notice.unwrap().contains(".pptx"));
    }

    #[test]
    fn test_empty_document_gets_no_content_summary() {
        let report = processor()
            .process("empty.txt".to_string(), b"  \n\n ".to_vec(), true)
            .unwrap();

        assert_eq!(report.summary, Some(Summary::NoContent));
        assert_eq!(report.stats.sentence_count, 0);
    }

    #[test]
    fn test_invalid_utf8_propagates() {
        let err = processor()
            .process("bad.txt".to_string(), vec![0x66, 0xff, 0x66], true)
            .unwrap_err();
        assert!(matches!(err, SummarizeError::Decode(_)));
    }

    #[test]
    fn test_summary_only_on_request() {
        let processor = processor();
        let mut report = processor
            .process("a.txt".to_string(), b"One. Two.".to_vec(), false)
            .unwrap();
        assert!(report.summary.is_none());

        processor.summarize(&mut report);
        assert!(report.summary.is_some());
        assert_eq!(report.stats.sentence_count, 2);
    }

    #[test]
    fn test_preview_is_truncated() {
        let mut config = Config::default_config();
        config.preview.max_chars = 10;
        let report = DocumentProcessor::new(config)
            .process("a.txt".to_string(), b"Plenty of words in this one.".to_vec(), false)
            .unwrap();

        assert_eq!(report.preview, "Plenty of ");
    }

    #[test]
    fn test_process_path_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Upper.TXT");
        std::fs::write(&path, "mergedWords here.Next one").unwrap();

        let report = processor().process_path(&path, false).unwrap();
        assert_eq!(report.clean_text.as_str(), "merged Words here. Next one");
        assert_eq!(report.document_name, "Upper.TXT");
    }

    #[test]
    fn test_process_path_rejects_before_reading() {
        let report = processor()
            .process_path(Path::new("/does/not/exist.odt"), true)
            .unwrap();
        assert!(report.is_rejected());
    }
}
