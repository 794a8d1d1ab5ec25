//! Sanitation pipeline for untrusted interactive HTML bundles.
//!
//! `vitrine-core` takes attacker-controlled ZIP archives of interactive
//! content, extracts them in memory, re-roots every path relative to the
//! `index.html` entry point, and rewrites that document to install a strict
//! compiled-in Content-Security-Policy header before anything is rendered
//! in a trusted origin. A separate path extracts a cover-image reference
//! from a raw document buffer.
//!
//! All operations are synchronous pure functions over in-memory buffers;
//! the crate performs no filesystem or network I/O.
//!
//! # Examples
//!
//! ```no_run
//! use vitrine_core::BundleLimits;
//! use vitrine_core::prepare_files_from_zip;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let buffer = std::fs::read("bundle.zip")?;
//! let files = prepare_files_from_zip(&buffer, &BundleLimits::default())?;
//! println!("sanitized {} files", files.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod bundle;
pub mod config;
pub mod cover;
pub mod error;
pub mod media;
pub mod policy;
pub mod transcode;

// Re-export main API types
pub use api::prepare_files_from_zip;
pub use archive::ArchiveEntry;
pub use archive::unzip_buffer;
pub use bundle::BundleFile;
pub use bundle::ENTRY_POINT;
pub use config::BundleLimits;
pub use cover::cover_image_path;
pub use error::BundleError;
pub use error::QuotaResource;
pub use error::Result;
pub use policy::CONTENT_SECURITY_POLICY;
pub use policy::inject_policy;
pub use transcode::inject_policy_into_bytes;
pub use transcode::inject_policy_into_data_uri;
