//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::SanitizeReport;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use vitrine_core::BundleFile;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_sanitize_result(&self, report: &SanitizeReport) -> Result<()> {
        #[derive(Serialize)]
        struct SanitizeOutput {
            output_dir: String,
            files_written: usize,
            directories_created: usize,
            bytes_written: u64,
        }

        let data = SanitizeOutput {
            output_dir: report.output_dir.display().to_string(),
            files_written: report.files_written,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
        };

        let output = JsonOutput::success("sanitize", data);
        Self::output(&output)
    }

    fn format_file_list(
        &self,
        files: &[BundleFile],
        _long: bool,
        _human_readable: bool,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct RecordOutput {
            path: String,
            size: u64,
            media_type: String,
        }

        #[derive(Serialize)]
        struct ListOutput {
            records: Vec<RecordOutput>,
            total_records: usize,
            total_size: u64,
        }

        let records: Vec<RecordOutput> = files
            .iter()
            .map(|f| RecordOutput {
                path: f.path.clone(),
                size: f.data.len() as u64,
                media_type: f.media_type.clone(),
            })
            .collect();

        let data = ListOutput {
            total_records: records.len(),
            total_size: records.iter().map(|r| r.size).sum(),
            records,
        };

        let output = JsonOutput::success("list", data);
        Self::output(&output)
    }

    fn format_document(&self, html: &str) -> Result<()> {
        #[derive(Serialize)]
        struct DocumentOutput {
            html: String,
        }

        let output = JsonOutput::success(
            "inject",
            DocumentOutput {
                html: html.to_string(),
            },
        );
        Self::output(&output)
    }

    fn format_cover_result(&self, cover: Option<&str>) -> Result<()> {
        #[derive(Serialize)]
        struct CoverOutput {
            cover: Option<String>,
        }

        let output = JsonOutput::success(
            "cover",
            CoverOutput {
                cover: cover.map(ToString::to_string),
            },
        );
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_success(&self, message: &str) {
        #[derive(Serialize)]
        struct SuccessData {
            message: String,
        }

        let output = JsonOutput::success(
            "unknown",
            SuccessData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
