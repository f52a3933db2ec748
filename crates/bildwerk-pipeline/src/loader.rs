// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image decode with a resolution cap. Oversized sources are downscaled
// uniformly so the larger dimension fits Full HD.

use image::DynamicImage;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use bildwerk_core::config::PipelineConfig;
use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::types::Downscale;

use crate::source::ValidatedSource;

/// A decoded, normalized, possibly downscaled source image.
#[derive(Debug)]
pub struct LoadedImage {
    /// Normalized to `ImageRgb8` for colour sources and `ImageLuma8` for
    /// grayscale sources, so channel count is always 3 or 1.
    pub image: DynamicImage,
    /// Present when the source exceeded the resolution cap.
    pub downscale: Option<Downscale>,
    /// SHA-256 of the encoded source file bytes.
    pub sha256: String,
}

/// Decode a validated source and apply the resolution cap.
#[instrument(skip_all, fields(path = %source.path.display()))]
pub fn load(source: &ValidatedSource, config: &PipelineConfig) -> Result<LoadedImage> {
    let bytes = std::fs::read(&source.path)?;
    let sha256 = hex::encode(Sha256::digest(&bytes));

    let decoded = image::load_from_memory(&bytes).map_err(|err| {
        BildwerkError::DecodeFailed(format!("{}: {}", source.path.display(), err))
    })?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(BildwerkError::DecodeFailed(format!(
            "{}: decoded to an empty buffer",
            source.path.display()
        )));
    }

    // Normalize the pixel layout: colour sources become 3-channel RGB,
    // grayscale sources stay single-channel. Alpha is discarded.
    let image = if decoded.color().has_color() {
        DynamicImage::ImageRgb8(decoded.to_rgb8())
    } else {
        DynamicImage::ImageLuma8(decoded.to_luma8())
    };

    info!(
        width = image.width(),
        height = image.height(),
        channels = image.color().channel_count(),
        "image loaded"
    );

    let (image, downscale) = cap_resolution(image, config);
    if let Some(d) = downscale {
        info!(from = ?d.from, to = ?d.to, "downscaled oversized image");
    }

    Ok(LoadedImage {
        image,
        downscale,
        sha256,
    })
}

/// Downscale uniformly if either dimension exceeds the cap.
///
/// Scale factor is `min(max_w/w, max_h/h)`; Lanczos3 filtering, aspect
/// ratio preserved within rounding.
fn cap_resolution(
    image: DynamicImage,
    config: &PipelineConfig,
) -> (DynamicImage, Option<Downscale>) {
    let (w, h) = (image.width(), image.height());
    if w <= config.max_width && h <= config.max_height {
        return (image, None);
    }

    let scale = f64::min(
        config.max_width as f64 / w as f64,
        config.max_height as f64 / h as f64,
    );
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);

    debug!(scale, new_w, new_h, "applying resolution cap");
    let resized = image.resize_exact(new_w, new_h, image::imageops::FilterType::Lanczos3);

    (
        resized,
        Some(Downscale {
            from: (w, h),
            to: (new_w, new_h),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bildwerk_core::types::SourceFormat;
    use image::{Rgb, RgbImage};

    fn write_png(dir: &std::path::Path, name: &str, image: &RgbImage) -> ValidatedSource {
        let path = dir.join(name);
        image.save(&path).unwrap();
        ValidatedSource {
            path,
            format: SourceFormat::Png,
        }
    }

    #[test]
    fn small_image_is_not_downscaled() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(640, 480, Rgb([10, 20, 30]));
        let source = write_png(dir.path(), "small.png", &img);

        let loaded = load(&source, &PipelineConfig::default()).unwrap();
        assert!(loaded.downscale.is_none());
        assert_eq!(loaded.image.width(), 640);
        assert_eq!(loaded.image.height(), 480);
        assert_eq!(loaded.sha256.len(), 64);
    }

    #[test]
    fn wide_image_is_capped_with_aspect_preserved() {
        let dir = tempfile::tempdir().unwrap();
        // 4000x1000: width drives the scale (1920/4000), height stays in bounds.
        let img = RgbImage::from_pixel(4000, 1000, Rgb([0, 0, 0]));
        let source = write_png(dir.path(), "wide.png", &img);

        let loaded = load(&source, &PipelineConfig::default()).unwrap();
        let d = loaded.downscale.unwrap();
        assert_eq!(d.from, (4000, 1000));
        assert_eq!(d.to, (1920, 480));
        assert_eq!(loaded.image.width(), 1920);
        assert_eq!(loaded.image.height(), 480);
    }

    #[test]
    fn tall_image_is_capped_by_height() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(1000, 2160, Rgb([0, 0, 0]));
        let source = write_png(dir.path(), "tall.png", &img);

        let loaded = load(&source, &PipelineConfig::default()).unwrap();
        let d = loaded.downscale.unwrap();
        assert_eq!(d.to, (500, 1080));
    }

    #[test]
    fn colour_source_normalizes_to_three_channels() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
        let source = write_png(dir.path(), "c.png", &img);

        let loaded = load(&source, &PipelineConfig::default()).unwrap();
        assert_eq!(loaded.image.color().channel_count(), 3);
    }

    #[test]
    fn gray_source_normalizes_to_one_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.png");
        image::GrayImage::from_pixel(8, 8, image::Luma([99])).save(&path).unwrap();
        let source = ValidatedSource {
            path,
            format: SourceFormat::Png,
        };

        let loaded = load(&source, &PipelineConfig::default()).unwrap();
        assert_eq!(loaded.image.color().channel_count(), 1);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image at all").unwrap();
        let source = ValidatedSource {
            path,
            format: SourceFormat::Png,
        };

        let err = load(&source, &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, BildwerkError::DecodeFailed(_)));
    }
}
