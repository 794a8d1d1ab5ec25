//! Inject command implementation.

use crate::cli::InjectArgs;
use crate::error::add_bundle_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use vitrine_core::inject_policy_into_bytes;

pub fn execute(args: &InjectArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read document '{}'", args.file.display()))?;

    let safe = add_bundle_context(inject_policy_into_bytes(&bytes), &args.file)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &safe)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            formatter.format_success(&format!(
                "Sanitized document written to {}",
                path.display()
            ));
        }
        None => {
            formatter.format_document(&String::from_utf8_lossy(&safe))?;
        }
    }

    Ok(())
}
