//! Candidate discovery under the images root.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::utils::{OUTPUT_EXTENSION, OptimizerError, OptimizerResult, is_candidate_image};

/// Walks `root` and returns every allow-listed image file, in traversal order.
///
/// Any directory named `output_marker` is pruned together with its subtree so
/// derivatives are never re-discovered as sources. A missing root is an error;
/// unreadable entries below it are skipped with a warning.
pub fn discover_images(root: &Path, output_marker: &str) -> OptimizerResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(OptimizerError::not_found(root));
    }

    let mut candidates = Vec::new();

    let marker = std::ffi::OsStr::new(output_marker);
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(move |entry| !(entry.file_type().is_dir() && entry.file_name() == marker));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_file() && is_candidate_image(entry.path()) {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}

/// Maps a source path to its derivative path under the output root.
///
/// The relative path below `images_root` is preserved and the extension is
/// swapped to the target format.
pub fn destination_for(source: &Path, images_root: &Path, output_root: &Path) -> PathBuf {
    let relative = source.strip_prefix(images_root).unwrap_or(source);
    output_root.join(relative).with_extension(OUTPUT_EXTENSION)
}
