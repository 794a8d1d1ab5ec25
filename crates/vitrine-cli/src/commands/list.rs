//! List command implementation.

use crate::cli::ListArgs;
use crate::error::add_bundle_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use vitrine_core::BundleLimits;
use vitrine_core::prepare_files_from_zip;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let buffer = fs::read(&args.bundle)
        .with_context(|| format!("failed to read bundle '{}'", args.bundle.display()))?;

    let files = add_bundle_context(
        prepare_files_from_zip(&buffer, &BundleLimits::default()),
        &args.bundle,
    )?;

    formatter.format_file_list(&files, args.long, args.human_readable)
}
