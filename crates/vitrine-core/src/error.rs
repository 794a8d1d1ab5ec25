//! Error types for bundle sanitation operations.

use thiserror::Error;

/// Result type alias using `BundleError`.
pub type Result<T> = std::result::Result<T, BundleError>;

/// Represents a specific extraction quota that was exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaResource {
    /// File count quota exceeded.
    FileCount {
        /// Current file count.
        current: usize,
        /// Maximum allowed file count.
        max: usize,
    },
    /// Total size quota exceeded.
    TotalSize {
        /// Current total size in bytes.
        current: u64,
        /// Maximum allowed total size in bytes.
        max: u64,
    },
    /// Single file size quota exceeded.
    FileSize {
        /// File size in bytes.
        size: u64,
        /// Maximum allowed file size in bytes.
        max: u64,
    },
    /// Integer overflow detected in quota tracking.
    IntegerOverflow,
}

impl std::fmt::Display for QuotaResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileCount { current, max } => {
                write!(f, "quota exceeded: file count ({current} > {max})")
            }
            Self::TotalSize { current, max } => {
                write!(f, "quota exceeded: total size ({current} > {max})")
            }
            Self::FileSize { size, max } => {
                write!(f, "quota exceeded: single file size ({size} > {max})")
            }
            Self::IntegerOverflow => {
                write!(f, "quota exceeded: integer overflow in quota tracking")
            }
        }
    }
}

/// Errors that can occur while sanitizing an untrusted bundle.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Archive data cannot be opened or decompressed.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// No `index.html` entry found anywhere in the archive.
    #[error("no index.html entry found in archive")]
    MissingEntryPoint,

    /// Entry document has no `<head>` section to install the policy into.
    #[error("entry document has no <head> section")]
    MissingHeadSection,

    /// Extraction quota exceeded.
    #[error("{resource}")]
    QuotaExceeded {
        /// Description of the exceeded resource.
        resource: QuotaResource,
    },

    /// Potential zip bomb detected.
    #[error(
        "potential zip bomb: compressed={compressed} bytes, uncompressed={uncompressed} bytes (ratio: {ratio:.2})"
    )]
    ZipBomb {
        /// Compressed size in bytes.
        compressed: u64,
        /// Uncompressed size in bytes.
        uncompressed: u64,
        /// Compression ratio.
        ratio: f64,
    },

    /// Inline resource string is not a valid base64 text/html data URI.
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    /// The HTML rewriter failed.
    #[error("failed to rewrite document: {0}")]
    Rewrite(String),
}

impl BundleError {
    /// Returns `true` if this error represents a security violation.
    ///
    /// Security violations are conditions where the bundle actively exceeds
    /// the resource envelope it is allowed to occupy:
    /// - Zip bombs
    /// - Quota exceeded
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine_core::BundleError;
    ///
    /// let err = BundleError::ZipBomb {
    ///     compressed: 1000,
    ///     uncompressed: 1_000_000,
    ///     ratio: 1000.0,
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = BundleError::MissingEntryPoint;
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::ZipBomb { .. } | Self::QuotaExceeded { .. })
    }

    /// Returns a context string for this error, if available.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::CorruptArchive(msg) | Self::InvalidDataUri(msg) | Self::Rewrite(msg) => {
                Some(msg)
            }
            _ => None,
        }
    }

    /// Returns the quota resource that was exceeded, if applicable.
    #[must_use]
    pub const fn quota_resource(&self) -> Option<&QuotaResource> {
        match self {
            Self::QuotaExceeded { resource } => Some(resource),
            _ => None,
        }
    }
}
