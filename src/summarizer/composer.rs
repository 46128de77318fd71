// file: src/summarizer/composer.rs
// description: positional extractive summary built from segmented sentences
// reference: lead and tail sentence selection

use crate::config::SummaryConfig;
use crate::models::{CleanText, Summary, SummarySections};
use crate::parser::split_sentences;
use tracing::debug;

pub struct SummaryComposer {
    windows: SummaryConfig,
}

impl SummaryComposer {
    pub fn new(windows: SummaryConfig) -> Self {
        Self { windows }
    }

    pub fn compose(&self, text: &CleanText) -> Summary {
        if text.is_empty() {
            return Summary::NoContent;
        }

        let sentences = split_sentences(text);
        debug!(sentence_count = sentences.len(), "Segmented text");

        Summary::Extract(self.select(&sentences))
    }

    /// Purely positional. Groups overlap on short inputs and nothing is deduplicated.
    pub fn select(&self, sentences: &[String]) -> SummarySections {
        let total = sentences.len();
        let window = |start: usize, end: usize| -> Vec<String> {
            let end = end.min(total);
            let start = start.min(end);
            sentences[start..end].to_vec()
        };

        SummarySections {
            introduction: window(0, self.windows.introduction_sentences),
            key_points: window(self.windows.key_points_start, self.windows.key_points_end),
            conclusion: window(total.saturating_sub(self.windows.conclusion_sentences), total),
        }
    }
}

impl Default for SummaryComposer {
    fn default() -> Self {
        Self::new(SummaryConfig::default())
    }
}
