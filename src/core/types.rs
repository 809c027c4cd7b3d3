//! Core types for compression settings and results.

use serde::{Deserialize, Serialize};

/// Settings for the size-bounded compression loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompressionSettings {
    /// Size ceiling for the derivative, in kilobytes
    pub max_size_kb: u32,
    /// Quality level the descent starts from (1-100)
    pub quality: u8,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            max_size_kb: 200,
            quality: 85,
        }
    }
}

/// Result of optimizing a single image.
///
/// Contains the original and derivative file information along with the
/// quality level the loop settled on.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Path to the original input file
    pub input_path: String,
    /// Path the derivative was written to
    pub output_path: String,
    /// Original file size in bytes
    pub original_size: u64,
    /// Derivative file size in bytes
    pub optimized_size: u64,
    /// Quality level of the accepted encoding
    pub quality: u8,
    /// Whether the derivative landed within the size ceiling.
    /// `false` means the bounded search was exhausted and the last
    /// scaled retry was accepted as a best-effort result.
    pub within_budget: bool,
}

/// Per-file outcome as seen by the batch driver.
#[derive(Debug)]
pub enum FileOutcome {
    /// Derivative written (within budget or best-effort)
    Converted(OptimizationResult),
    /// Destination was already newer than the source
    SkippedFresh,
    /// Decode/encode/IO failure, isolated to this file
    Failed(String),
}
