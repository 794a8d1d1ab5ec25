//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use vitrine_core::BundleFile;

/// Summary of a sanitize run that materialized records to disk.
#[derive(Debug)]
pub struct SanitizeReport {
    /// Directory the records were written under.
    pub output_dir: PathBuf,
    /// Number of file records written.
    pub files_written: usize,
    /// Number of directory records created.
    pub directories_created: usize,
    /// Total bytes written.
    pub bytes_written: u64,
}

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format sanitize result
    fn format_sanitize_result(&self, report: &SanitizeReport) -> Result<()>;

    /// Format a bundle's sanitized record set
    fn format_file_list(&self, files: &[BundleFile], long: bool, human_readable: bool)
    -> Result<()>;

    /// Format a sanitized HTML document payload
    fn format_document(&self, html: &str) -> Result<()>;

    /// Format a cover-image lookup result
    fn format_cover_result(&self, cover: Option<&str>) -> Result<()>;

    /// Format error message
    #[allow(dead_code)]
    fn format_error(&self, error: &anyhow::Error);

    /// Format success message
    fn format_success(&self, message: &str);

    /// Format warning message
    #[allow(dead_code)]
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    #[allow(dead_code)]
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
