//! End-to-end coverage of the image optimization batch.

use std::path::Path;
use std::time::Duration;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

use site_optimizer::processing::{
    BatchConfig, compress_to_budget, destination_for, discover_images, run_batch,
};
use site_optimizer::{CompressionSettings, OptimizerError};

/// Deterministic per-pixel noise; lossy encoders cannot compress it well,
/// which is exactly what the fallback-path tests need.
fn noise_image(width: u32, height: u32) -> RgbImage {
    let mut state: u32 = 0x2545_f491;
    RgbImage::from_fn(width, height, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let bytes = state.to_le_bytes();
        Rgb([bytes[0], bytes[1], bytes[2]])
    })
}

fn default_settings() -> CompressionSettings {
    CompressionSettings::default()
}

fn write_noise_png(path: &Path, width: u32, height: u32) {
    noise_image(width, height).save(path).unwrap();
}

#[test]
fn small_image_accepted_at_starting_quality() {
    let flat = RgbImage::from_pixel(64, 64, Rgb([90, 120, 150]));
    let result = compress_to_budget(flat, &default_settings()).unwrap();

    assert_eq!(result.quality, 85, "first descent level must win");
    assert!(result.within_budget);
    assert_eq!((result.width, result.height), (64, 64));
}

#[test]
fn unattainable_budget_reaches_forced_and_scaled_fallback() {
    let settings = CompressionSettings {
        max_size_kb: 1,
        quality: 85,
    };
    let result = compress_to_budget(noise_image(600, 600), &settings).unwrap();

    // The descent can never satisfy 1KB for dense noise, so the forced
    // low-quality attempt plus the single scaled retry must have run.
    assert_eq!(result.quality, 60);
    assert!(result.width <= 600 && result.height <= 600);
    assert!(!result.data.is_empty());
}

#[test]
fn output_dimensions_never_increase() {
    let settings = CompressionSettings {
        max_size_kb: 10,
        quality: 85,
    };
    let result = compress_to_budget(noise_image(400, 300), &settings).unwrap();
    assert!(result.width <= 400);
    assert!(result.height <= 300);

    let decoded = image::load_from_memory(&result.data).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (result.width, result.height));
}

#[test]
fn batch_converts_and_mirrors_directory_structure() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir_all(images.join("gallery")).unwrap();

    write_noise_png(&images.join("hero.png"), 120, 80);
    noise_image(100, 100)
        .save(images.join("gallery").join("shot.jpg"))
        .unwrap();

    let config = BatchConfig::new(&images, default_settings());
    let summary = run_batch(&config).unwrap();

    assert_eq!(summary.found, 2);
    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed, 0);
    assert!(images.join("webp").join("hero.webp").is_file());
    assert!(images.join("webp").join("gallery").join("shot.webp").is_file());
}

#[test]
fn second_run_skips_every_fresh_file() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();
    write_noise_png(&images.join("a.png"), 90, 90);
    write_noise_png(&images.join("b.png"), 60, 60);

    // Make sure derivative mtimes land strictly after the sources, even on
    // filesystems with coarse timestamps.
    std::thread::sleep(Duration::from_millis(1100));

    let config = BatchConfig::new(&images, default_settings());
    let first = run_batch(&config).unwrap();
    assert_eq!(first.converted, 2);

    let second = run_batch(&config).unwrap();
    assert_eq!(second.converted, 0);
    assert_eq!(second.skipped_fresh, 2);
    assert_eq!(second.failed, 0);
}

#[test]
fn corrupt_file_is_isolated_from_siblings() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();

    std::fs::write(images.join("broken.jpg"), b"definitely not an image").unwrap();
    write_noise_png(&images.join("valid.png"), 80, 80);

    let config = BatchConfig::new(&images, default_settings());
    let summary = run_batch(&config).unwrap();

    assert_eq!(summary.found, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.converted, 1);
    assert!(images.join("webp").join("valid.webp").is_file());
    assert!(!images.join("webp").join("broken.webp").exists());
}

#[test]
fn transparent_source_converts_cleanly() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();

    let rgba = RgbaImage::from_fn(50, 50, |x, _| {
        Rgba([200, 40, 40, if x % 2 == 0 { 0 } else { 255 }])
    });
    rgba.save(images.join("logo.png")).unwrap();

    let config = BatchConfig::new(&images, default_settings());
    let summary = run_batch(&config).unwrap();
    assert_eq!(summary.converted, 1);

    let decoded = image::open(images.join("webp").join("logo.webp")).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (50, 50));
}

#[test]
fn missing_root_surfaces_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = run_batch(&BatchConfig::new(&missing, default_settings())).unwrap_err();
    assert!(matches!(err, OptimizerError::NotFound(_)));
}

#[test]
fn discovery_prunes_output_subtree_and_matches_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir_all(images.join("webp")).unwrap();

    write_noise_png(&images.join("keep.PNG"), 16, 16);
    write_noise_png(&images.join("webp").join("derived.png"), 16, 16);
    std::fs::write(images.join("notes.txt"), b"ignored").unwrap();

    let found = discover_images(&images, "webp").unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("keep.PNG"));
}

#[test]
fn destination_swaps_extension_and_preserves_relative_path() {
    let images = Path::new("/site/public/images");
    let output = Path::new("/site/public/images/webp");

    let dest = destination_for(
        Path::new("/site/public/images/gallery/car.jpeg"),
        images,
        output,
    );
    assert_eq!(
        dest,
        Path::new("/site/public/images/webp/gallery/car.webp")
    );
}
