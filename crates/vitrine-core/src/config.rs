//! Extraction limits for untrusted bundles.

/// Resource limits enforced while extracting an untrusted archive.
///
/// Bundles are attacker-controlled, so extraction is bounded before any
/// entry data is buffered in memory.
///
/// # Examples
///
/// ```
/// use vitrine_core::BundleLimits;
///
/// // Use secure defaults
/// let limits = BundleLimits::default();
///
/// // Customize for specific needs
/// let custom = BundleLimits {
///     max_file_size: 100 * 1024 * 1024,   // 100 MB
///     max_total_size: 1024 * 1024 * 1024, // 1 GB
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BundleLimits {
    /// Maximum size for a single decompressed file in bytes.
    pub max_file_size: u64,

    /// Maximum total decompressed size for all entries in bytes.
    pub max_total_size: u64,

    /// Maximum compression ratio allowed (uncompressed / compressed).
    pub max_compression_ratio: f64,

    /// Maximum number of entries that can be extracted.
    pub max_file_count: usize,
}

impl Default for BundleLimits {
    /// Creates `BundleLimits` with secure default settings.
    ///
    /// Default values:
    /// - `max_file_size`: 50 MB
    /// - `max_total_size`: 500 MB
    /// - `max_compression_ratio`: 100.0
    /// - `max_file_count`: 10,000
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,   // 50 MB
            max_total_size: 500 * 1024 * 1024, // 500 MB
            max_compression_ratio: 100.0,
            max_file_count: 10_000,
        }
    }
}

impl BundleLimits {
    /// Creates a permissive configuration for trusted bundles.
    ///
    /// Use only when the archive comes from a source that is already
    /// trusted to occupy arbitrary memory.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            max_file_size: u64::MAX,
            max_total_size: u64::MAX,
            max_compression_ratio: 10_000.0,
            max_file_count: usize::MAX,
        }
    }
}
