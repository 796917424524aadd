//! Target-path utilities for imageprep
//!
//! Filesystem overlay keys are paths inside the target image, not on the
//! machine running this tool, so they are handled as plain strings here.

/// Whether a target path is absolute and clean.
///
/// Clean means no `.` or `..` segments, no empty segments (`//`), and no
/// trailing slash. Overlay keys must satisfy this so that path comparisons
/// and merge semantics stay purely textual.
pub fn is_clean_absolute(path: &str) -> bool {
    if !path.starts_with('/') || path == "/" {
        return false;
    }
    if path.ends_with('/') {
        return false;
    }
    path[1..]
        .split('/')
        .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

/// The parent directory of a target path, for `mkdir -p` rendering.
///
/// Returns `"/"` for top-level entries such as `/EMPTY`.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "/",
    }
}

/// Quote a target path for safe interpolation into a shell fragment.
///
/// Single-quotes the path and escapes embedded single quotes. Paths come
/// from configuration, so this is belt-and-braces rather than a shell
/// escaping engine.
pub fn shell_quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', r"'\''"))
}
