//! URL modeling and local file name derivation.
//!
//! Downloaded images are named after the last segment of their URL path,
//! percent-decoded and made safe for the local filesystem.

mod path;
mod sanitize;

pub use path::last_path_segment;
pub use sanitize::sanitize_file_name;

/// Derives the local file name for `url`, or `None` when the URL has no
/// usable name (unparsable URL, path ending in `/`, `.` or `..`).
///
/// # Examples
///
/// - `file_name_for_url("http://example.com/a/image123.jpg")` → `Some("image123.jpg")`
/// - `file_name_for_url("http://example.com/gallery/")` → `None`
pub fn file_name_for_url(url: &str) -> Option<String> {
    let segment = last_path_segment(url)?;
    let name = sanitize_file_name(&segment);
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name)
    }
}
