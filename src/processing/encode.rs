//! Color normalization, WebP encoding, and resize helpers.
//!
//! The output encoding does not reliably support transparency for this
//! pipeline, so anything carrying an alpha channel is composited onto an
//! opaque white background before encoding.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use crate::utils::{OptimizerError, OptimizerResult};

/// Normalizes any decoded image to a 3-channel RGB image.
///
/// Inputs with alpha (RGBA, LA, palette with transparency) are composited
/// onto opaque white. Everything else converts directly.
pub fn flatten_to_rgb(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flat = RgbImage::new(width, height);

    for (src, dst) in rgba.pixels().zip(flat.pixels_mut()) {
        let alpha = src[3] as u16;
        for c in 0..3 {
            // src over white: a*c + (255-a)*255, rounded
            let v = (src[c] as u16 * alpha + 255 * (255 - alpha) + 127) / 255;
            dst[c] = v as u8;
        }
    }

    flat
}

/// Encodes `image` as lossy WebP at `quality` and returns the bytes.
pub fn encode_webp(image: &RgbImage, quality: u8) -> OptimizerResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let encoder = webp::Encoder::from_rgb(image.as_raw(), width, height);
    let memory = encoder
        .encode_simple(false, quality as f32)
        .map_err(|e| OptimizerError::encode(format!("WebP encoding failed: {e:?}")))?;
    Ok(memory.to_vec())
}

/// Resizes `image` by a linear `factor` in both dimensions with Lanczos3.
///
/// Dimensions are floored but never drop below one pixel. Factors >= 1.0
/// return the image unchanged; the pipeline never enlarges.
pub fn scale_by(image: &RgbImage, factor: f64) -> RgbImage {
    if factor >= 1.0 {
        return image.clone();
    }
    let width = ((image.width() as f64 * factor) as u32).max(1);
    let height = ((image.height() as f64 * factor) as u32).max(1);
    image::imageops::resize(image, width, height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn flatten_composites_transparency_onto_white() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([0, 0, 0, 0])); // fully transparent
        rgba.put_pixel(1, 0, Rgba([100, 150, 200, 255])); // fully opaque

        let flat = flatten_to_rgb(DynamicImage::ImageRgba8(rgba));
        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(flat.get_pixel(1, 0).0, [100, 150, 200]);
    }

    #[test]
    fn scale_never_enlarges_or_hits_zero() {
        let img = RgbImage::new(10, 10);
        assert_eq!(scale_by(&img, 1.3).dimensions(), (10, 10));
        assert_eq!(scale_by(&img, 0.9).dimensions(), (9, 9));
        assert_eq!(scale_by(&img, 0.01).dimensions(), (1, 1));
    }
}
