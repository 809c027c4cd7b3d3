//! Image task definition.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::CompressionSettings;

/// A single source-to-derivative conversion unit.
///
/// Created per discovered file by the batch driver and consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the derivative will be written
    pub output_path: PathBuf,
    /// Size ceiling and starting quality for the compression loop
    pub settings: CompressionSettings,
}

impl ImageTask {
    pub fn new(input_path: PathBuf, output_path: PathBuf, settings: CompressionSettings) -> Self {
        Self {
            input_path,
            output_path,
            settings,
        }
    }
}
