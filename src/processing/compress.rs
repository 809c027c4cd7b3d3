//! The size-bounded compression loop.
//!
//! A bounded greedy search over two parameters, quality and dimensions:
//! descend through quality levels, shrinking the working image whenever the
//! encoding overshoots the ceiling badly, then fall back to one forced
//! low-quality attempt and at most one scaled retry. The loop never
//! guarantees the ceiling is met, only that this sequence was attempted.

use image::RgbImage;
use tracing::debug;

use crate::core::{CompressionSettings, ImageTask, OptimizationResult};
use crate::processing::encode::{encode_webp, flatten_to_rgb, scale_by};
use crate::utils::{OptimizerError, OptimizerResult, ensure_parent_dir};

/// Lowest quality the stepped descent reaches (exclusive).
pub const QUALITY_FLOOR: u8 = 40;
/// Quality decrement per descent step.
pub const QUALITY_STEP: u8 = 5;
/// Quality used for the forced attempt and the scaled retry.
pub const FORCED_QUALITY: u8 = 60;
/// Overshoot ratio that triggers a proactive shrink before the next step.
pub const OVERSHOOT_FACTOR: f64 = 1.5;
/// Linear shrink applied on overshoot; compounds across iterations.
pub const SHRINK_FACTOR: f64 = 0.9;

/// An accepted WebP encoding plus the parameters that produced it.
#[derive(Debug)]
pub struct EncodedDerivative {
    /// Encoded WebP bytes
    pub data: Vec<u8>,
    /// Quality level of the accepted encoding
    pub quality: u8,
    /// Pixel width of the encoded image
    pub width: u32,
    /// Pixel height of the encoded image
    pub height: u32,
    /// Whether the encoding landed within the size ceiling
    pub within_budget: bool,
}

fn size_kb(data: &[u8]) -> f64 {
    data.len() as f64 / 1024.0
}

/// Runs the quality descent on an already-flattened image.
///
/// Returns the first encoding that satisfies the ceiling; since quality
/// levels are tried highest-first, that is also the highest satisfying
/// level. When the descent and the forced attempt both miss, the scaled
/// retry's output is returned regardless of its final size, flagged as
/// best-effort.
pub fn compress_to_budget(
    mut image: RgbImage,
    settings: &CompressionSettings,
) -> OptimizerResult<EncodedDerivative> {
    let max_kb = settings.max_size_kb as f64;

    let mut quality = settings.quality;
    while quality > QUALITY_FLOOR {
        let data = encode_webp(&image, quality)?;
        let kb = size_kb(&data);
        debug!("quality {quality}: {kb:.1}KB ({}x{})", image.width(), image.height());

        if kb <= max_kb {
            return Ok(EncodedDerivative {
                quality,
                width: image.width(),
                height: image.height(),
                within_budget: true,
                data,
            });
        }

        // Badly over budget: shrink before trying the next level. Each
        // trigger shrinks the then-current dimensions, not the original.
        if kb > max_kb * OVERSHOOT_FACTOR {
            image = scale_by(&image, SHRINK_FACTOR);
        }

        quality = quality.saturating_sub(QUALITY_STEP);
    }

    // Forced attempt at a fixed low quality on the (possibly shrunk) image.
    let data = encode_webp(&image, FORCED_QUALITY)?;
    let kb = size_kb(&data);
    debug!("forced quality {FORCED_QUALITY}: {kb:.1}KB");

    if kb <= max_kb {
        return Ok(EncodedDerivative {
            quality: FORCED_QUALITY,
            width: image.width(),
            height: image.height(),
            within_budget: true,
            data,
        });
    }

    // Last attempt: one sqrt-scaled resize, re-encode, accept the result.
    let factor = (max_kb / kb).sqrt();
    let image = scale_by(&image, factor);
    let data = encode_webp(&image, FORCED_QUALITY)?;
    let final_kb = size_kb(&data);
    debug!("scaled retry x{factor:.3}: {final_kb:.1}KB");

    Ok(EncodedDerivative {
        quality: FORCED_QUALITY,
        width: image.width(),
        height: image.height(),
        within_budget: final_kb <= max_kb,
        data,
    })
}

/// Optimizes one task end to end: decode, flatten, compress, write.
///
/// The decoded source and the encoded bytes live only inside this call;
/// both handles are released on return, success or failure.
pub fn optimize_file(task: &ImageTask) -> OptimizerResult<OptimizationResult> {
    let original_size = std::fs::metadata(&task.input_path)
        .map_err(|e| OptimizerError::io(format!("Cannot read input file: {e}")))?
        .len();

    let decoded = image::open(&task.input_path).map_err(|e| {
        OptimizerError::decode(format!(
            "Failed to decode '{}': {e}",
            task.input_path.display()
        ))
    })?;

    let derivative = compress_to_budget(flatten_to_rgb(decoded), &task.settings)?;

    ensure_parent_dir(&task.output_path)?;
    std::fs::write(&task.output_path, &derivative.data).map_err(|e| {
        OptimizerError::io(format!(
            "Failed to write '{}': {e}",
            task.output_path.display()
        ))
    })?;

    Ok(OptimizationResult {
        input_path: task.input_path.display().to_string(),
        output_path: task.output_path.display().to_string(),
        original_size,
        optimized_size: derivative.data.len() as u64,
        quality: derivative.quality,
        within_budget: derivative.within_budget,
    })
}
