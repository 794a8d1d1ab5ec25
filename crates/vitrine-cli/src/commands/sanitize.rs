//! Sanitize command implementation.

use crate::cli::SanitizeArgs;
use crate::error::add_bundle_context;
use crate::output::OutputFormatter;
use crate::output::SanitizeReport;
use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use std::env;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use vitrine_core::BundleLimits;
use vitrine_core::prepare_files_from_zip;

pub fn execute(args: &SanitizeArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let limits = BundleLimits {
        max_file_count: args.max_files,
        max_total_size: args.max_total_size.unwrap_or(500 * 1024 * 1024),
        max_file_size: args.max_file_size.unwrap_or(50 * 1024 * 1024),
        max_compression_ratio: f64::from(args.max_compression_ratio),
    };

    let buffer = fs::read(&args.bundle)
        .with_context(|| format!("failed to read bundle '{}'", args.bundle.display()))?;

    let files = add_bundle_context(prepare_files_from_zip(&buffer, &limits), &args.bundle)?;

    let mut report = SanitizeReport {
        output_dir: output_dir.clone(),
        files_written: 0,
        directories_created: 0,
        bytes_written: 0,
    };

    for file in &files {
        let rel = safe_relative_path(&file.path).ok_or_else(|| {
            anyhow!(
                "refusing to materialize '{}': path escapes the output directory",
                file.path
            )
        })?;
        let target = output_dir.join(rel);

        if file.is_directory() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create directory '{}'", target.display()))?;
            report.directories_created += 1;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory '{}'", parent.display())
                })?;
            }
            fs::write(&target, &file.data)
                .with_context(|| format!("failed to write '{}'", target.display()))?;
            report.files_written += 1;
            report.bytes_written += file.data.len() as u64;
        }
    }

    formatter.format_sanitize_result(&report)
}

/// Reduces a record path to a normal relative path, or `None` when it
/// carries parent/root components that would land outside the output
/// directory.
fn safe_relative_path(path: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}
