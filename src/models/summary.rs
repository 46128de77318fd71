// file: src/models/summary.rs
// description: extractive summary model and its markdown-like rendering
// reference: internal data structures

use serde::Serialize;
use std::fmt;

pub const NO_CONTENT_MESSAGE: &str = "No text content found in the document to summarize.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// Nothing survived extraction and sanitization.
    NoContent,
    Extract(SummarySections),
}

/// Three positional groups. Groups may share sentences when the document is short.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummarySections {
    pub introduction: Vec<String>,
    pub key_points: Vec<String>,
    pub conclusion: Vec<String>,
}

impl SummarySections {
    pub fn groups(&self) -> [(&'static str, &[String]); 3] {
        [
            ("Introduction", &self.introduction),
            ("Key Points", &self.key_points),
            ("Conclusion", &self.conclusion),
        ]
    }
}

impl Summary {
    pub fn sections(&self) -> Option<&SummarySections> {
        match self {
            Self::NoContent => None,
            Self::Extract(sections) => Some(sections),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = match self {
            Self::NoContent => return f.write_str(NO_CONTENT_MESSAGE),
            Self::Extract(sections) => sections,
        };

        writeln!(f, "## Summary")?;
        for (heading, sentences) in sections.groups() {
            writeln!(f)?;
            writeln!(f, "### {heading}")?;
            for sentence in sentences {
                writeln!(f, "- {sentence}")?;
            }
        }

        Ok(())
    }
}
