//! Media type inference from file extensions.

/// Reserved media type for zero-length entries carried over from the
/// archive's directory records.
///
/// Downstream renderers must treat records with this type as structure, not
/// content.
pub const DIRECTORY_MEDIA_TYPE: &str = "application/x-directory";

/// Fallback media type for unrecognized extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Determine the media type of a bundle file from its extension.
///
/// Covers the formats interactive bundles ship in practice; anything else
/// falls back to [`OCTET_STREAM`].
#[must_use]
pub fn media_type_for_path(path: &str) -> &'static str {
    let ext = path
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "html" | "htm" => "text/html",
        "js" | "mjs" => "text/javascript",
        "css" => "text/css",
        "json" => "application/json",
        "txt" => "text/plain",
        "xml" => "application/xml",
        "wasm" => "application/wasm",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "tif" | "tiff" => "image/tiff",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "glb" => "model/gltf-binary",
        "gltf" => "model/gltf+json",
        _ => OCTET_STREAM,
    }
}
