//! Filesystem-style path decomposition.
//!
//! Filer paths are slash-delimited; backslash separators are accepted and
//! normalized before splitting. The root `"/"` has no parent and is never
//! looked up or created remotely.

/// Splits a path into `(parent directory, leaf name)`.
///
/// Trailing separators are ignored, so `"/a/b/"` splits like `"/a/b"`.
/// Returns `None` when the path has no parent: the root itself, an empty
/// string, or a bare name with no separator. `FilerClient::exists` handles
/// the `None` case by substituting `(path, "")`; every other operation
/// requires a parent.
pub fn split_path(path: &str) -> Option<(String, String)> {
    let normalized = path.replace('\\', "/");
    let trimmed = normalized.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.rfind('/') {
        None => None,
        Some(0) => Some(("/".to_string(), trimmed[1..].to_string())),
        Some(idx) => Some((trimmed[..idx].to_string(), trimmed[idx + 1..].to_string())),
    }
}
