// file: src/utils/validation.rs
// description: upload validation helpers
// reference: input validation patterns

use crate::error::{Result, SummarizeError};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            SummarizeError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(SummarizeError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    /// The whole document is held in memory, so uploads are capped.
    pub fn validate_file_size(size: u64, max_bytes: u64) -> Result<()> {
        if size > max_bytes {
            return Err(SummarizeError::Validation(format!(
                "File is {} bytes, larger than the {} byte limit",
                size, max_bytes
            )));
        }
        Ok(())
    }

    pub fn validate_preview_chars(chars: usize) -> Result<()> {
        if chars == 0 {
            return Err(SummarizeError::Validation(
                "Preview length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
