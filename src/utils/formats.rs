//! Input allow-list and output format naming.

use std::path::Path;

/// Extension written to every derivative.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Source extensions eligible for conversion, matched case-insensitively.
pub const INPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Check whether `path` carries one of the allow-listed raster extensions.
pub fn is_candidate_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext.as_str()))
}
