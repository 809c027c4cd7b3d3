//! Batch driver: discovery, freshness check, per-file isolation, tally.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::{CompressionSettings, FileOutcome, ImageTask};
use crate::processing::compress::optimize_file;
use crate::processing::discovery::{destination_for, discover_images};
use crate::utils::{OptimizerResult, modified_time};

/// Where the batch reads from and writes to.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Root directory holding the source images
    pub images_dir: PathBuf,
    /// Name of the output subtree under the images root
    pub output_dir_name: String,
    /// Settings applied to every task
    pub settings: CompressionSettings,
}

impl BatchConfig {
    pub fn new(images_dir: impl Into<PathBuf>, settings: CompressionSettings) -> Self {
        Self {
            images_dir: images_dir.into(),
            output_dir_name: "webp".to_string(),
            settings,
        }
    }

    fn output_root(&self) -> PathBuf {
        self.images_dir.join(&self.output_dir_name)
    }
}

/// Tally of one batch run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchSummary {
    /// Candidate files discovered under the root
    pub found: usize,
    /// Derivatives written (including best-effort ones)
    pub converted: usize,
    /// Conversions that missed the size ceiling after all fallbacks
    pub best_effort: usize,
    /// Files skipped because the derivative was already newer
    pub skipped_fresh: usize,
    /// Files that failed to decode, encode, or write
    pub failed: usize,
}

/// Skip when the derivative exists and is strictly newer than the source.
///
/// Purely an optimization: reprocessing a fresh file is idempotent, so any
/// mtime read failure just means the file is treated as stale.
fn is_fresh(source: &Path, destination: &Path) -> bool {
    if !destination.exists() {
        return false;
    }
    match (modified_time(destination), modified_time(source)) {
        (Ok(dest), Ok(src)) => dest > src,
        _ => false,
    }
}

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
}

/// Processes one discovered candidate, converting any failure into an outcome.
fn process_candidate(source: PathBuf, config: &BatchConfig) -> FileOutcome {
    let destination = destination_for(&source, &config.images_dir, &config.output_root());

    if is_fresh(&source, &destination) {
        info!("⊘ Skipping {} (already optimized)", file_name(&source));
        return FileOutcome::SkippedFresh;
    }

    let task = ImageTask::new(source, destination, config.settings);
    match optimize_file(&task) {
        Ok(result) => {
            let kb = result.optimized_size as f64 / 1024.0;
            if result.within_budget {
                info!(
                    "✓ {} -> {} ({kb:.1}KB, quality={})",
                    file_name(&task.input_path),
                    file_name(&task.output_path),
                    result.quality
                );
            } else {
                warn!(
                    "✓ {} -> {} ({kb:.1}KB, quality={}) exceeds {}KB ceiling, kept as best effort",
                    file_name(&task.input_path),
                    file_name(&task.output_path),
                    result.quality,
                    task.settings.max_size_kb
                );
            }
            FileOutcome::Converted(result)
        }
        Err(e) => {
            warn!("✗ Error processing {}: {e}", task.input_path.display());
            FileOutcome::Failed(e.to_string())
        }
    }
}

/// Runs the full batch sequentially and returns the tally.
///
/// A missing images root is the only error surfaced to the caller; every
/// per-file failure is logged and isolated so sibling files still convert.
pub fn run_batch(config: &BatchConfig) -> OptimizerResult<BatchSummary> {
    let candidates = discover_images(&config.images_dir, &config.output_dir_name)?;

    let mut summary = BatchSummary {
        found: candidates.len(),
        ..BatchSummary::default()
    };

    if candidates.is_empty() {
        info!("No images found to optimize");
        return Ok(summary);
    }

    info!("Found {} images to optimize", summary.found);

    for source in candidates {
        match process_candidate(source, config) {
            FileOutcome::Converted(result) => {
                summary.converted += 1;
                if !result.within_budget {
                    summary.best_effort += 1;
                }
            }
            FileOutcome::SkippedFresh => summary.skipped_fresh += 1,
            FileOutcome::Failed(_) => summary.failed += 1,
        }
    }

    info!("✓ Converted {} images to WebP format", summary.converted);
    info!("✓ WebP images saved to: {}", config.output_root().display());
    if summary.failed > 0 {
        warn!("{} file(s) failed and were skipped", summary.failed);
    }

    Ok(summary)
}
