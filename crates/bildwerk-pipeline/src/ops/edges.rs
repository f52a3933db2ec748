// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge and detail responses — Canny edge extraction and the Laplacian
// second-derivative filter.

use image::{GrayImage, Luma};
use imageproc::edges::canny;
use imageproc::filter::laplacian_filter;
use tracing::debug;

/// Gradient-based edge extraction with hysteresis thresholds.
pub fn canny_edges(gray: &GrayImage, low: f32, high: f32) -> GrayImage {
    debug!(low, high, "running Canny edge detection");
    canny(gray, low, high)
}

/// Laplacian second-derivative response, rendered for display.
///
/// The raw response is signed 16-bit; for the gallery the absolute response
/// is clamped into 8-bit, so both dark-to-light and light-to-dark
/// transitions show as bright detail.
pub fn laplacian(gray: &GrayImage) -> GrayImage {
    let response = laplacian_filter(gray);
    let (w, h) = response.dimensions();

    GrayImage::from_fn(w, h, |x, y| {
        let v = response.get_pixel(x, y).0[0];
        Luma([v.unsigned_abs().min(255) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A hard vertical step edge must produce edge pixels near the step and
    /// none in the flat regions far from it.
    #[test]
    fn canny_finds_a_step_edge() {
        let mut gray = GrayImage::new(64, 64);
        for (x, _, p) in gray.enumerate_pixels_mut() {
            *p = if x < 32 { Luma([20]) } else { Luma([220]) };
        }

        let edges = canny_edges(&gray, 100.0, 200.0);
        let lit_near_step = (0..64).any(|y| {
            (30..34).any(|x| edges.get_pixel(x, y).0[0] > 0)
        });
        assert!(lit_near_step, "no edge response at the step");

        let lit_far_away = (0..64).any(|y| edges.get_pixel(5, y).0[0] > 0);
        assert!(!lit_far_away, "edge response in a flat region");
    }

    #[test]
    fn canny_on_uniform_image_is_blank() {
        let gray = GrayImage::from_pixel(32, 32, Luma([128]));
        let edges = canny_edges(&gray, 100.0, 200.0);
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn laplacian_of_uniform_image_is_flat() {
        let gray = GrayImage::from_pixel(16, 16, Luma([200]));
        let out = laplacian(&gray);
        // Interior pixels see a constant neighbourhood: zero response.
        for y in 1..15 {
            for x in 1..15 {
                assert_eq!(out.get_pixel(x, y).0[0], 0);
            }
        }
    }

    #[test]
    fn laplacian_responds_at_a_step() {
        let mut gray = GrayImage::new(16, 16);
        for (x, _, p) in gray.enumerate_pixels_mut() {
            *p = if x < 8 { Luma([0]) } else { Luma([255]) };
        }
        let out = laplacian(&gray);
        let lit = (1..15).any(|y| out.get_pixel(7, y).0[0] > 0 || out.get_pixel(8, y).0[0] > 0);
        assert!(lit, "no Laplacian response at the step");
    }
}
