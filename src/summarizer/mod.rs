// file: src/summarizer/mod.rs
// description: summary composition module exports
// reference: internal module structure

pub mod composer;

pub use composer::SummaryComposer;
