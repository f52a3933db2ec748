// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Parameters of the fixed processing sequence.
///
/// The defaults reproduce the classic demo settings; they are exposed as a
/// config struct so individual runs can override the gallery root or the
/// resolution cap without touching the pipeline code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum source width before downscaling kicks in.
    pub max_width: u32,
    /// Maximum source height before downscaling kicks in.
    pub max_height: u32,
    /// Canny hysteresis thresholds.
    pub canny_low: f32,
    pub canny_high: f32,
    /// Gaussian smoothing kernel size (odd, in pixels).
    pub gaussian_kernel: u32,
    /// Box (mean) smoothing kernel size (odd, in pixels).
    pub box_kernel: u32,
    /// Histogram plot canvas dimensions.
    pub histogram_width: u32,
    pub histogram_height: u32,
    /// Directory under which per-run gallery directories are created.
    pub gallery_root: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_width: 1920,
            max_height: 1080,
            canny_low: 100.0,
            canny_high: 200.0,
            gaussian_kernel: 15,
            box_kernel: 5,
            histogram_width: 512,
            histogram_height: 400,
            gallery_root: PathBuf::from("bildwerk-out"),
        }
    }
}

impl PipelineConfig {
    /// Gaussian sigma matching `gaussian_kernel`.
    ///
    /// Uses the conventional kernel-size relation
    /// `sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`, so the default 15px
    /// kernel maps to sigma 2.6.
    pub fn gaussian_sigma(&self) -> f32 {
        0.3 * ((self.gaussian_kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }

    /// Box filter radius: a 5px kernel is radius 2.
    pub fn box_radius(&self) -> u32 {
        self.box_kernel / 2
    }
}
