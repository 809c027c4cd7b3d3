use std::path::Path;
use std::time::SystemTime;

use crate::utils::{OptimizerError, OptimizerResult};

/// Get the last-modified timestamp of a file
pub fn modified_time(path: impl AsRef<Path>) -> OptimizerResult<SystemTime> {
    std::fs::metadata(path.as_ref())?
        .modified()
        .map_err(|e| OptimizerError::io(format!("Failed to read mtime: {e}")))
}

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> OptimizerResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| OptimizerError::io(format!("Cannot create output directory: {e}")))?;
    }
    Ok(())
}
