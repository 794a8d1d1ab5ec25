//! Root location and path re-rooting for extracted bundles.

use crate::ArchiveEntry;
use crate::BundleError;
use crate::Result;
use crate::media;

/// Conventional entry-point filename a rendering surface loads first.
pub const ENTRY_POINT: &str = "index.html";

/// A file record ready to be served to a renderer.
///
/// Paths are relative to the bundle root (the directory containing the
/// entry-point document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    /// Root-relative, slash-separated path.
    pub path: String,
    /// File content; empty for directory records.
    pub data: Vec<u8>,
    /// Media type inferred from the extension, or
    /// [`media::DIRECTORY_MEDIA_TYPE`] for zero-length entries.
    pub media_type: String,
}

impl BundleFile {
    /// Returns `true` if this record is a directory carried over from the
    /// archive, not a real file.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.media_type == media::DIRECTORY_MEDIA_TYPE
    }
}

/// Finds the bundle root: the directory prefix of the first entry whose
/// final path segment is [`ENTRY_POINT`].
///
/// Iteration order is archive order, and the first match wins. Archives
/// with several candidate entry points are not disambiguated further; the
/// tie-break is deterministic but depends on the order entries were added
/// to the archive.
///
/// Returns the empty string when the entry point sits at the top level.
///
/// # Errors
///
/// Returns [`BundleError::MissingEntryPoint`] when no entry matches.
pub fn locate_root(entries: &[ArchiveEntry]) -> Result<&str> {
    for entry in entries {
        let filename = entry.path.rsplit('/').next().unwrap_or_default();
        if filename == ENTRY_POINT {
            return Ok(entry
                .path
                .rsplit_once('/')
                .map_or("", |(dir, _)| dir));
        }
    }
    Err(BundleError::MissingEntryPoint)
}

/// Strips `root` from `path` if `path` sits under it.
///
/// The match is segment-aligned: a root of `root` never strips `root2/x`.
/// The root directory entry itself reduces to the empty string; paths
/// outside the root come back unchanged.
#[must_use]
pub fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    if root.is_empty() {
        return path;
    }
    if let Some(rest) = path.strip_prefix(root) {
        if rest.is_empty() {
            return "";
        }
        if let Some(rel) = rest.strip_prefix('/') {
            return rel;
        }
    }
    path
}

/// Re-roots extracted entries and tags them with media types.
///
/// Entries whose re-rooted path is empty (the root directory record) are
/// dropped. Zero-length entries are tagged with the reserved directory
/// media type so renderers never mistake them for real files.
///
/// # Errors
///
/// Returns [`BundleError::MissingEntryPoint`] when the archive holds no
/// entry-point document.
pub fn prepare_entries(entries: Vec<ArchiveEntry>) -> Result<Vec<BundleFile>> {
    let root = locate_root(&entries)?.to_owned();

    let mut files = Vec::with_capacity(entries.len());
    for entry in entries {
        let rel = strip_root(&entry.path, &root);
        if rel.is_empty() {
            continue;
        }
        let media_type = if entry.data.is_empty() {
            media::DIRECTORY_MEDIA_TYPE
        } else {
            media::media_type_for_path(rel)
        };
        files.push(BundleFile {
            path: rel.to_owned(),
            data: entry.data,
            media_type: media_type.to_owned(),
        });
    }

    Ok(files)
}
