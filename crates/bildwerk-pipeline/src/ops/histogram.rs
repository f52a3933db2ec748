// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intensity histogram computation and line-plot rendering.

use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use tracing::debug;

/// 256-bucket intensity histogram of a grayscale buffer.
pub fn intensity_histogram(gray: &GrayImage) -> [u32; 256] {
    let mut counts = [0u32; 256];
    for pixel in gray.pixels() {
        counts[pixel.0[0] as usize] += 1;
    }
    counts
}

/// Min-max normalize bucket counts to `[0, height]` for plotting.
///
/// A uniform image (single spike) normalizes to one full-height bucket and
/// zero everywhere else.
fn normalize(counts: &[u32; 256], height: u32) -> [u32; 256] {
    let max = counts.iter().copied().max().unwrap_or(0);
    let mut out = [0u32; 256];
    if max == 0 {
        return out;
    }
    for (o, &c) in out.iter_mut().zip(counts.iter()) {
        *o = (c as u64 * height as u64 / max as u64) as u32;
    }
    out
}

/// Render the histogram of a grayscale buffer as a connected line plot.
///
/// White polyline on a black canvas, buckets spread evenly across the
/// canvas width, counts min-max normalized to the canvas height.
pub fn plot(gray: &GrayImage, canvas_width: u32, canvas_height: u32) -> RgbImage {
    let counts = intensity_histogram(gray);
    let normalized = normalize(&counts, canvas_height);
    debug!(canvas_width, canvas_height, "rendering histogram plot");

    let mut canvas = RgbImage::new(canvas_width, canvas_height);
    let bin_width = canvas_width as f32 / 256.0;
    let white = Rgb([255u8, 255, 255]);

    for i in 1..256usize {
        let x0 = bin_width * (i - 1) as f32;
        let x1 = bin_width * i as f32;
        // Canvas y grows downward; clamp to keep full-height spikes on-canvas.
        let y0 = (canvas_height - normalized[i - 1]).min(canvas_height - 1) as f32;
        let y1 = (canvas_height - normalized[i]).min(canvas_height - 1) as f32;
        draw_line_segment_mut(&mut canvas, (x0, y0), (x1, y1), white);
    }

    canvas
}
