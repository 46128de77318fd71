// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod processor;
mod progress;

pub use processor::{DocumentProcessor, ProcessingReport};
pub use progress::{ExtractionSpinner, ProcessingStats};
