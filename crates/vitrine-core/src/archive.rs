//! In-memory extraction of untrusted ZIP buffers.

use std::io::Cursor;
use std::io::Read;

use crate::BundleError;
use crate::BundleLimits;
use crate::Result;
use crate::error::QuotaResource;

/// One archived object, exactly as it appears in the container.
///
/// Paths are archive-relative and slash-separated. Directories are carried
/// as zero-length entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Archive-internal path of the entry.
    pub path: String,
    /// Decompressed content; empty for directories.
    pub data: Vec<u8>,
}

/// Validates compression ratio to detect potential zip bombs.
///
/// A zero compressed size with non-zero uncompressed size is treated as an
/// infinite ratio.
///
/// # Errors
///
/// Returns an error if the compression ratio exceeds the configured maximum.
pub fn validate_compression_ratio(
    compressed_size: u64,
    uncompressed_size: u64,
    limits: &BundleLimits,
) -> Result<()> {
    if compressed_size == 0 {
        if uncompressed_size == 0 {
            return Ok(());
        }
        return Err(BundleError::ZipBomb {
            compressed: 0,
            uncompressed: uncompressed_size,
            ratio: f64::INFINITY,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = uncompressed_size as f64 / compressed_size as f64;

    if ratio > limits.max_compression_ratio {
        return Err(BundleError::ZipBomb {
            compressed: compressed_size,
            uncompressed: uncompressed_size,
            ratio,
        });
    }

    Ok(())
}

/// Decompresses an untrusted ZIP buffer into its entries.
///
/// Entries come back in archive order, one per archived object, with
/// directories as zero-length entries. Nothing is written to disk and no
/// archive content is executed or interpreted here.
///
/// Declared sizes are checked against `limits` before an entry is buffered,
/// and the actual decompressed length is checked again afterwards so a lying
/// header cannot bypass the quota.
///
/// # Errors
///
/// Returns [`BundleError::CorruptArchive`] when the buffer is not a readable
/// ZIP container or an entry fails to decompress, [`BundleError::ZipBomb`]
/// or [`BundleError::QuotaExceeded`] when `limits` are violated.
///
/// # Examples
///
/// ```no_run
/// use vitrine_core::BundleLimits;
/// use vitrine_core::unzip_buffer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let buffer = std::fs::read("bundle.zip")?;
/// let entries = unzip_buffer(&buffer, &BundleLimits::default())?;
/// println!("{} entries", entries.len());
/// # Ok(())
/// # }
/// ```
pub fn unzip_buffer(buffer: &[u8], limits: &BundleLimits) -> Result<Vec<ArchiveEntry>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(buffer))
        .map_err(|e| BundleError::CorruptArchive(format!("failed to open ZIP archive: {e}")))?;

    let mut entries = Vec::with_capacity(archive.len());
    let mut total_size: u64 = 0;

    for i in 0..archive.len() {
        if entries.len() >= limits.max_file_count {
            return Err(BundleError::QuotaExceeded {
                resource: QuotaResource::FileCount {
                    current: entries.len(),
                    max: limits.max_file_count,
                },
            });
        }

        let mut file = archive
            .by_index(i)
            .map_err(|e| BundleError::CorruptArchive(format!("failed to read ZIP entry: {e}")))?;

        let path = file.name().to_string();

        validate_compression_ratio(file.compressed_size(), file.size(), limits)?;

        if file.size() > limits.max_file_size {
            return Err(BundleError::QuotaExceeded {
                resource: QuotaResource::FileSize {
                    size: file.size(),
                    max: limits.max_file_size,
                },
            });
        }

        let mut data = Vec::new();
        // Cap the read one past the limit: declared sizes come from the
        // entry header, which the attacker controls.
        let mut reader = file.by_ref().take(limits.max_file_size.saturating_add(1));
        reader.read_to_end(&mut data).map_err(|e| {
            BundleError::CorruptArchive(format!("failed to decompress '{path}': {e}"))
        })?;

        let actual_size = data.len() as u64;
        if actual_size > limits.max_file_size {
            return Err(BundleError::QuotaExceeded {
                resource: QuotaResource::FileSize {
                    size: actual_size,
                    max: limits.max_file_size,
                },
            });
        }

        total_size = total_size
            .checked_add(actual_size)
            .ok_or(BundleError::QuotaExceeded {
                resource: QuotaResource::IntegerOverflow,
            })?;
        if total_size > limits.max_total_size {
            return Err(BundleError::QuotaExceeded {
                resource: QuotaResource::TotalSize {
                    current: total_size,
                    max: limits.max_total_size,
                },
            });
        }

        entries.push(ArchiveEntry { path, data });
    }

    Ok(entries)
}
