//! Cover command implementation.

use crate::cli::CoverArgs;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use vitrine_core::cover_image_path;

pub fn execute(args: &CoverArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read document '{}'", args.file.display()))?;

    // A missing cover image is an expected outcome, not a failure.
    let cover = cover_image_path(&bytes);
    formatter.format_cover_result(cover.as_deref())
}
