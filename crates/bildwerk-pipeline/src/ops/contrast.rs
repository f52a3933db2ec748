// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Histogram equalization.

use image::GrayImage;
use imageproc::contrast::equalize_histogram;

/// Redistribute the intensity histogram of a grayscale buffer for contrast.
pub fn equalize(gray: &GrayImage) -> GrayImage {
    equalize_histogram(gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn output_dimensions_match_input() {
        let gray = GrayImage::new(31, 17);
        assert_eq!(equalize(&gray).dimensions(), (31, 17));
    }

    /// Equalizing an image that already spans the full intensity range is
    /// approximately idempotent: a half-black, half-white image maps black
    /// near 0 and white to 255.
    #[test]
    fn equalize_on_max_contrast_is_near_identity() {
        let mut gray = GrayImage::new(10, 10);
        for (x, _, p) in gray.enumerate_pixels_mut() {
            *p = if x < 5 { Luma([0]) } else { Luma([255]) };
        }

        let out = equalize(&gray);
        for (x, _, p) in out.enumerate_pixels() {
            if x < 5 {
                // Equalization maps the lowest bucket to its CDF value, which
                // for a 50/50 split lands in the lower half.
                assert!(p.0[0] <= 128, "dark half drifted to {}", p.0[0]);
            } else {
                assert!(p.0[0] >= 250, "bright half drifted to {}", p.0[0]);
            }
        }
    }
}
