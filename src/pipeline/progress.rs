// file: src/pipeline/progress.rs
// description: per-document processing statistics and extraction spinner
// reference: https://docs.rs/indicatif

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingStats {
    pub bytes_read: u64,
    pub raw_chars: usize,
    pub clean_chars: usize,
    pub sentence_count: usize,
    pub duration_ms: u64,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of extracted characters that survived sanitization.
    pub fn retention_rate(&self) -> f64 {
        if self.raw_chars == 0 {
            return 0.0;
        }
        (self.clean_chars as f64 / self.raw_chars as f64) * 100.0
    }

    pub fn bytes_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.bytes_read as f64 / (self.duration_ms as f64 / 1000.0)
    }
}

/// Spinner on stderr while a document is being extracted.
pub struct ExtractionSpinner {
    bar: ProgressBar,
}

impl ExtractionSpinner {
    pub fn start(document_name: &str, colored: bool) -> Self {
        let bar = if colored {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };

        bar.set_message(format!("Extracting {document_name}"));
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ExtractionSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}
