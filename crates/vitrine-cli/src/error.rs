//! Error conversion utilities for CLI.
//!
//! Converts vitrine-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use vitrine_core::BundleError;

/// Converts `BundleError` to user-friendly anyhow error with context
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn convert_bundle_error(err: BundleError, bundle: &Path) -> anyhow::Error {
    match err {
        BundleError::CorruptArchive(reason) => {
            anyhow!(
                "Invalid bundle '{}': {}\n\
                 HINT: The file may be corrupted or not a ZIP archive.",
                bundle.display(),
                reason
            )
        }
        BundleError::MissingEntryPoint => {
            anyhow!(
                "No index.html found anywhere in '{}'\n\
                 HINT: Interactive bundles must ship an index.html entry point.",
                bundle.display()
            )
        }
        BundleError::MissingHeadSection => {
            anyhow!(
                "The entry document in '{}' has no <head> section\n\
                 HINT: The isolation policy needs a <head> to be installed into; \
                 the document cannot be rendered safely without one.",
                bundle.display()
            )
        }
        BundleError::ZipBomb {
            compressed,
            uncompressed,
            ratio,
        } => {
            anyhow!(
                "Security violation: '{}' appears to be a zip bomb\n\
                 Compression ratio: {}:1 ({}KB → {}MB)\n\
                 HINT: Use --max-compression-ratio to allow higher ratios if legitimate.",
                bundle.display(),
                ratio as u64,
                compressed / 1024,
                uncompressed / 1024 / 1024
            )
        }
        BundleError::QuotaExceeded { resource } => {
            anyhow!(
                "Extraction limit exceeded for '{}': {}\n\
                 HINT: Use --max-files, --max-total-size, or --max-file-size to increase limits.",
                bundle.display(),
                resource
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error processing bundle '{}'", bundle.display())),
    }
}

/// Adds context to a generic error about bundle operations
pub fn add_bundle_context<T>(
    result: Result<T, BundleError>,
    bundle: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_bundle_error(e, bundle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_corrupt_archive_error() {
        let err = BundleError::CorruptArchive("bad central directory".to_string());
        let converted = convert_bundle_error(err, Path::new("broken.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Invalid bundle"));
        assert!(msg.contains("broken.zip"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_missing_entry_point_error() {
        let converted = convert_bundle_error(BundleError::MissingEntryPoint, Path::new("a.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("No index.html"));
        assert!(msg.contains("a.zip"));
    }

    #[test]
    fn test_convert_missing_head_error() {
        let converted = convert_bundle_error(BundleError::MissingHeadSection, Path::new("a.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("<head>"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_zip_bomb_error() {
        let err = BundleError::ZipBomb {
            compressed: 1024,
            uncompressed: 1024 * 1024 * 150,
            ratio: 150.0,
        };
        let converted = convert_bundle_error(err, Path::new("bomb.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("zip bomb"));
        assert!(msg.contains("150:1"));
    }
}
