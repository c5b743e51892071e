//! Storage object naming
//!
//! Object names must be collision-resistant and safe for a repository path:
//! the base name is sanitized to `[A-Za-z0-9_]`, truncated to 50 characters,
//! and suffixed with a millisecond timestamp before the original extension.

use std::path::Path;

/// Maximum length of the sanitized base name
const MAX_BASE_LEN: usize = 50;

/// Derive the storage object name from the original file name
pub(crate) fn object_name(original_name: &str, timestamp_millis: i64) -> String {
    let path = Path::new(original_name);

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_BASE_LEN)
        .collect();
    let base = if base.is_empty() { "file".to_string() } else { base };

    match path.extension() {
        Some(ext) => format!("{base}_{timestamp_millis}.{}", ext.to_string_lossy()),
        None => format!("{base}_{timestamp_millis}"),
    }
}

/// Storage folder for a MIME type
pub(crate) fn storage_folder(mime_type: &str) -> &'static str {
    if mime_type.starts_with("image/") {
        "images"
    } else if mime_type.starts_with("video/") {
        "videos"
    } else if mime_type == "application/pdf" || mime_type.contains("document") {
        "documents"
    } else {
        "others"
    }
}

/// Full repository path for an uploaded object
pub(crate) fn object_path(original_name: &str, mime_type: &str, timestamp_millis: i64) -> String {
    format!(
        "uploads/{}/{}",
        storage_folder(mime_type),
        object_name(original_name, timestamp_millis)
    )
}
