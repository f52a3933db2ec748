// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale conversion and channel isolation.

use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use tracing::debug;

/// Convert the working image to single-channel luminance.
pub fn grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Isolate each colour channel of a 3-channel image.
///
/// Returns `(red, green, blue)`, where each output keeps one channel of the
/// source and zeroes the other two, so the channel renders in its own
/// colour rather than as a gray intensity map.
pub fn split_channels(image: &RgbImage) -> (RgbImage, RgbImage, RgbImage) {
    let (w, h) = image.dimensions();
    debug!(w, h, "isolating colour channels");

    let red = RgbImage::from_fn(w, h, |x, y| {
        let Rgb([r, _, _]) = *image.get_pixel(x, y);
        Rgb([r, 0, 0])
    });
    let green = RgbImage::from_fn(w, h, |x, y| {
        let Rgb([_, g, _]) = *image.get_pixel(x, y);
        Rgb([0, g, 0])
    });
    let blue = RgbImage::from_fn(w, h, |x, y| {
        let Rgb([_, _, b]) = *image.get_pixel(x, y);
        Rgb([0, 0, b])
    });

    (red, green, blue)
}
