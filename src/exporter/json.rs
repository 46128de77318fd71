// file: src/exporter/json.rs
// description: json export of a processed document report

use crate::error::Result;
use crate::pipeline::ProcessingReport;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub exported_at: String,
    pub generator: &'static str,
    #[serde(flatten)]
    pub report: &'a ProcessingReport,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn to_json(&self, report: &ProcessingReport) -> Result<String> {
        let exported = ExportedReport {
            exported_at: Utc::now().to_rfc3339(),
            generator: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")),
            report,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };
        Ok(json)
    }

    pub fn export(&self, report: &ProcessingReport, output: impl AsRef<Path>) -> Result<PathBuf> {
        let output = output.as_ref().to_path_buf();
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&output, self.to_json(report)?)?;
        info!("Exported report for {} to {:?}", report.document_name, output);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pipeline::DocumentProcessor;
    use tempfile::tempdir;

    fn report() -> ProcessingReport {
        DocumentProcessor::new(Config::default_config())
            .process("memo.txt".to_string(), b"First. Second. Third.".to_vec(), true)
            .unwrap()
    }

    #[test]
    fn test_json_contains_summary_groups() {
        let json = JsonExporter::new(false).to_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["document_name"], "memo.txt");
        assert_eq!(value["format"], "plain-text");
        assert_eq!(value["summary"]["kind"], "extract");
        assert_eq!(value["summary"]["introduction"][0], "First.");
        assert_eq!(value["summary"]["conclusion"][1], "Third.");
        assert_eq!(value["stats"]["sentence_count"], 3);
        assert!(value.get("clean_text").is_none());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/report.json");

        let written = JsonExporter::new(true).export(&report(), &path).unwrap();

        assert_eq!(written, path);
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"exported_at\""));
    }
}
