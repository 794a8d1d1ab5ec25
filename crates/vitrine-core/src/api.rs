//! High-level public API for bundle sanitation.

use crate::BundleFile;
use crate::BundleLimits;
use crate::Result;
use crate::archive::unzip_buffer;
use crate::bundle::{ENTRY_POINT, prepare_entries};
use crate::transcode::inject_policy_into_bytes;

/// Runs the full sanitation pipeline over an untrusted ZIP buffer.
///
/// Extracts the archive, re-roots every path relative to the entry-point
/// document, installs the content-isolation policy into the `index.html`
/// record, and returns the sanitized file set ready for rendering.
///
/// There is no partial-success mode for the entry document: either the
/// policy is installed, or the call fails and nothing should be rendered.
///
/// # Errors
///
/// Returns [`crate::BundleError::CorruptArchive`] for undecodable archives,
/// [`crate::BundleError::MissingEntryPoint`] when no `index.html` exists,
/// [`crate::BundleError::MissingHeadSection`] when the entry document has
/// no `<head>`, and quota/zip-bomb errors when `limits` are violated.
///
/// # Examples
///
/// ```no_run
/// use vitrine_core::BundleLimits;
/// use vitrine_core::prepare_files_from_zip;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let buffer = std::fs::read("bundle.zip")?;
/// let files = prepare_files_from_zip(&buffer, &BundleLimits::default())?;
/// for file in &files {
///     println!("{} ({})", file.path, file.media_type);
/// }
/// # Ok(())
/// # }
/// ```
pub fn prepare_files_from_zip(buffer: &[u8], limits: &BundleLimits) -> Result<Vec<BundleFile>> {
    let entries = unzip_buffer(buffer, limits)?;
    let mut files = prepare_entries(entries)?;

    // prepare_entries guarantees the entry that fixed the root reduces to
    // exactly ENTRY_POINT, so this lookup cannot miss.
    if let Some(index) = files.iter_mut().find(|f| f.path == ENTRY_POINT) {
        index.data = inject_policy_into_bytes(&index.data)?;
    }

    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::BundleError;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for (path, data) in files {
            writer.start_file(*path, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_prepare_files_from_zip_sanitizes_entry_document() {
        let buffer = build_zip(&[
            ("root/index.html", b"<html><head></head><body></body></html>"),
            ("root/style.css", b"body {}"),
        ]);

        let files = prepare_files_from_zip(&buffer, &BundleLimits::default()).unwrap();
        assert_eq!(files.len(), 2);

        let index = files.iter().find(|f| f.path == "index.html").unwrap();
        let html = String::from_utf8(index.data.clone()).unwrap();
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn test_prepare_files_from_zip_missing_entry_point() {
        let buffer = build_zip(&[("root/style.css", b"body {}")]);
        let result = prepare_files_from_zip(&buffer, &BundleLimits::default());
        assert!(matches!(result, Err(BundleError::MissingEntryPoint)));
    }

    #[test]
    fn test_prepare_files_from_zip_missing_head() {
        let buffer = build_zip(&[("root/index.html", b"<html><body>headless</body></html>")]);
        let result = prepare_files_from_zip(&buffer, &BundleLimits::default());
        assert!(matches!(result, Err(BundleError::MissingHeadSection)));
    }

    #[test]
    fn test_prepare_files_from_zip_corrupt_buffer() {
        let result = prepare_files_from_zip(b"garbage", &BundleLimits::default());
        assert!(matches!(result, Err(BundleError::CorruptArchive(_))));
    }
}
