use std::path::Path;

/// Extract a display title from a file path
///
/// Returns the final path component, or "Untitled" if it can't be extracted.
pub fn title_from_path(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Rewrite every occurrence of `old` inside `path` with `new`.
///
/// Used when a tab is renamed and its backing path tracks the title.
/// An empty `old` leaves the path unchanged.
pub fn retitle_path(path: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return path.to_string();
    }
    path.replace(old, new)
}
