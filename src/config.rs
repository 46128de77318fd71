// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SummarizeError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub preview: PreviewConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewConfig {
    pub max_chars: usize,
}

/// Positional windows used by the summary composer. `key_points_end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummaryConfig {
    pub introduction_sentences: usize,
    pub key_points_start: usize,
    pub key_points_end: usize,
    pub conclusion_sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            introduction_sentences: 2,
            key_points_start: 2,
            key_points_end: 6,
            conclusion_sentences: 2,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default(
                "extraction.max_file_size_mb",
                defaults.extraction.max_file_size_mb as u64,
            )
            .and_then(|b| b.set_default("preview.max_chars", defaults.preview.max_chars as u64))
            .and_then(|b| {
                b.set_default(
                    "summary.introduction_sentences",
                    defaults.summary.introduction_sentences as u64,
                )
            })
            .and_then(|b| {
                b.set_default(
                    "summary.key_points_start",
                    defaults.summary.key_points_start as u64,
                )
            })
            .and_then(|b| {
                b.set_default("summary.key_points_end", defaults.summary.key_points_end as u64)
            })
            .and_then(|b| {
                b.set_default(
                    "summary.conclusion_sentences",
                    defaults.summary.conclusion_sentences as u64,
                )
            })
            .map_err(|e| SummarizeError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOC_SUMMARIZE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SummarizeError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SummarizeError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            extraction: ExtractionConfig {
                max_file_size_mb: 25,
            },
            preview: PreviewConfig { max_chars: 500 },
            summary: SummaryConfig::default(),
        }
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.extraction.max_file_size_mb as u64 * 1024 * 1024
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.max_file_size_mb == 0 {
            return Err(SummarizeError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        if self.preview.max_chars == 0 {
            return Err(SummarizeError::Config(
                "preview max_chars must be greater than 0".to_string(),
            ));
        }

        let summary = &self.summary;
        if summary.introduction_sentences == 0 || summary.conclusion_sentences == 0 {
            return Err(SummarizeError::Config(
                "introduction and conclusion must select at least one sentence".to_string(),
            ));
        }

        if summary.key_points_end < summary.key_points_start {
            return Err(SummarizeError::Config(format!(
                "key_points_end ({}) is before key_points_start ({})",
                summary.key_points_end, summary.key_points_start
            )));
        }

        Ok(())
    }
}
