//! Conversions between the external representations of the entry document.
//!
//! The entry document travels as a raw byte buffer (archive content) or as
//! a self-describing base64 data URI (inline token metadata). Both paths
//! funnel through [`crate::policy::inject_policy`]; no other component
//! applies the policy, so the process-wide constant has exactly two entry
//! points into documents.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::BundleError;
use crate::Result;
use crate::policy::inject_policy;

/// Fixed prefix of the self-describing inline representation.
pub const DATA_URI_PREFIX: &str = "data:text/html;base64,";

/// Sanitizes an HTML document carried as a base64 `text/html` data URI.
///
/// The payload is decoded, the content-isolation policy is installed, and
/// the result is re-encoded under the same prefix. Text decoding is lossy
/// UTF-8: an untrusted payload with broken encoding still gets sanitized
/// rather than rejected.
///
/// # Errors
///
/// Returns [`BundleError::InvalidDataUri`] when the prefix is missing or
/// the payload is not valid base64, and propagates
/// [`BundleError::MissingHeadSection`] from the injection itself.
pub fn inject_policy_into_data_uri(uri: &str) -> Result<String> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| BundleError::InvalidDataUri(format!("expected '{DATA_URI_PREFIX}' prefix")))?;

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| BundleError::InvalidDataUri(e.to_string()))?;

    let html = String::from_utf8_lossy(&bytes);
    let safe = inject_policy(&html)?;

    Ok(format!("{DATA_URI_PREFIX}{}", BASE64.encode(safe.as_bytes())))
}

/// Sanitizes an HTML document carried as a raw byte buffer.
///
/// Decodes lossily as UTF-8, installs the content-isolation policy, and
/// re-encodes.
///
/// # Errors
///
/// Propagates [`BundleError::MissingHeadSection`] from the injection.
pub fn inject_policy_into_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    let html = String::from_utf8_lossy(bytes);
    let safe = inject_policy(&html)?;
    Ok(safe.into_bytes())
}
