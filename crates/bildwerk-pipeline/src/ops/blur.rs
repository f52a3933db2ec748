// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Smoothing filters — Gaussian and box (mean) blur. Both accept the working
// image in either of its normalized layouts (3-channel RGB or 1-channel
// luma) and blur what they are given.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::{box_filter, gaussian_blur_f32};
use tracing::debug;

/// Gaussian smoothing with the given sigma.
pub fn gaussian(image: &DynamicImage, sigma: f32) -> DynamicImage {
    debug!(sigma, "applying Gaussian blur");
    match image {
        DynamicImage::ImageLuma8(gray) => {
            DynamicImage::ImageLuma8(gaussian_blur_f32(gray, sigma))
        }
        other => DynamicImage::ImageRgb8(gaussian_blur_f32(&other.to_rgb8(), sigma)),
    }
}

/// Mean smoothing over a `(2*radius + 1)` square kernel.
///
/// `imageproc::filter::box_filter` is single-channel, so colour images are
/// filtered plane by plane and recombined.
pub fn box_blur(image: &DynamicImage, radius: u32) -> DynamicImage {
    debug!(radius, "applying box blur");
    match image {
        DynamicImage::ImageLuma8(gray) => {
            DynamicImage::ImageLuma8(box_filter(gray, radius, radius))
        }
        other => {
            let rgb = other.to_rgb8();
            let planes: Vec<GrayImage> = (0..3)
                .map(|c| {
                    let plane = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                        Luma([rgb.get_pixel(x, y).0[c]])
                    });
                    box_filter(&plane, radius, radius)
                })
                .collect();

            let merged = RgbImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                Rgb([
                    planes[0].get_pixel(x, y).0[0],
                    planes[1].get_pixel(x, y).0[0],
                    planes[2].get_pixel(x, y).0[0],
                ])
            });
            DynamicImage::ImageRgb8(merged)
        }
    }
}
