// file: src/extractor/word.rs
// description: paragraph text extraction from .docx containers
// reference: https://docs.rs/docx-rs

use crate::error::{Result, SummarizeError};
use crate::models::{DocumentFormat, RawText};
use docx_rs::{DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};
use tracing::info;

pub struct WordExtractor;

impl WordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Top-level paragraphs in document order, one per line. Tables are skipped.
    pub fn extract(&self, bytes: &[u8]) -> Result<RawText> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| SummarizeError::extraction(DocumentFormat::Word, e.to_string()))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        info!(
            paragraph_count = paragraphs.len(),
            "Word text extraction complete"
        );

        Ok(RawText::new(paragraphs.join("\n")))
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

/// Hyperlinks and tracked insertions wrap ordinary runs, so their text counts too.
fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for inserted in &insert.children {
                    if let InsertChild::Run(run) = inserted {
                        push_run(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Insert};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();
        buffer.into_inner()
    }

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        pack(docx)
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Visit "))
            .add_hyperlink(
                Hyperlink::new("https://example.com", HyperlinkType::External)
                    .add_run(Run::new().add_text("our site")),
            )
            .add_run(Run::new().add_text(" for details."));

        let bytes = pack(Docx::new().add_paragraph(paragraph));
        let raw = WordExtractor::new().extract(&bytes).unwrap();

        assert_eq!(raw.as_str(), "Visit our site for details.");
    }

    #[test]
    fn test_inserted_run_text_is_kept() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Kept "))
            .add_insert(Insert::new(Run::new().add_text("inserted text.")));

        let bytes = pack(Docx::new().add_paragraph(paragraph));
        let raw = WordExtractor::new().extract(&bytes).unwrap();

        assert_eq!(raw.as_str(), "Kept inserted text.");
    }

    #[test]
    fn test_line_break_separates_words() {
        let run = Run::new()
            .add_text("first line")
            .add_break(BreakType::TextWrapping)
            .add_text("second line");

        let bytes = pack(Docx::new().add_paragraph(Paragraph::new().add_run(run)));
        let raw = WordExtractor::new().extract(&bytes).unwrap();

        assert_eq!(raw.as_str(), "first line\nsecond line");
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let bytes = build_docx(&["First paragraph.", "Second paragraph.", "Third."]);
        let raw = WordExtractor::new().extract(&bytes).unwrap();

        assert_eq!(
            raw.as_str().lines().collect::<Vec<_>>(),
            vec!["First paragraph.", "Second paragraph.", "Third."]
        );
    }

    #[test]
    fn test_invalid_container_is_an_extraction_error() {
        let err = WordExtractor::new().extract(b"PK not really a zip").unwrap_err();
        assert!(matches!(
            err,
            SummarizeError::Extraction {
                format: DocumentFormat::Word,
                ..
            }
        ));
    }
}
