// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline orchestration — the fixed processing sequence, strictly
// sequential, no retry. A fatal failure stops the run before any later
// stage is produced.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use bildwerk_core::config::PipelineConfig;
use bildwerk_core::error::Result;
use bildwerk_core::types::{RunId, Stage};

use crate::gallery::RunGallery;
use crate::ops::{blur, channels, contrast, edges, histogram};
use crate::{loader, source};

/// Summary of a completed run, for user-facing reporting.
#[derive(Debug)]
pub struct RunReport {
    pub run_id: RunId,
    /// Directory the gallery was written into.
    pub gallery_dir: PathBuf,
    pub manifest_path: PathBuf,
    /// Number of stages produced.
    pub stage_count: usize,
    /// Plain-text notices accumulated along the way (downscale, channel
    /// skip). The caller decides how to surface them.
    pub notices: Vec<String>,
}

/// The fixed processing sequence.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the whole sequence on the image at `raw_path`.
    ///
    /// `raw_path` is taken exactly as the user typed it; quote trimming and
    /// validation happen here. Stages are written to the gallery in order:
    /// original, grayscale, per-channel isolations (3-channel sources
    /// only), equalized grayscale, histogram plot, Canny edges, Gaussian
    /// blur, box blur, Laplacian.
    #[instrument(skip(self))]
    pub fn run(&self, raw_path: &str) -> Result<RunReport> {
        let source = source::validate(raw_path)?;
        let loaded = loader::load(&source, &self.config)?;

        let run_id = RunId::new();
        let mut notices = Vec::new();
        if let Some(d) = loaded.downscale {
            notices.push(format!("Resized large image to {}x{}.", d.to.0, d.to.1));
        }

        let mut gallery =
            RunGallery::create(&self.config.gallery_root, &source.stem(), run_id)?;

        // Stage sequence. The grayscale derivative feeds every intensity
        // operation; the (possibly downscaled) original feeds the blurs.
        gallery.add(Stage::Original, &loaded.image)?;

        let gray = channels::grayscale(&loaded.image);
        gallery.add_gray(Stage::Grayscale, gray.clone())?;

        match loaded.image.as_rgb8() {
            Some(rgb) => {
                let (red, green, blue) = channels::split_channels(rgb);
                gallery.add_rgb(Stage::RedChannel, red)?;
                gallery.add_rgb(Stage::GreenChannel, green)?;
                gallery.add_rgb(Stage::BlueChannel, blue)?;
            }
            None => {
                warn!("source is not 3-channel, skipping channel isolation");
                notices.push(
                    "The image does not have 3 channels. Skipping channel display.".into(),
                );
            }
        }

        gallery.add_gray(Stage::Equalized, contrast::equalize(&gray))?;

        gallery.add_rgb(
            Stage::HistogramPlot,
            histogram::plot(
                &gray,
                self.config.histogram_width,
                self.config.histogram_height,
            ),
        )?;

        gallery.add_gray(
            Stage::CannyEdges,
            edges::canny_edges(&gray, self.config.canny_low, self.config.canny_high),
        )?;

        gallery.add(
            Stage::GaussianBlur,
            &blur::gaussian(&loaded.image, self.config.gaussian_sigma()),
        )?;

        gallery.add(
            Stage::BoxBlur,
            &blur::box_blur(&loaded.image, self.config.box_radius()),
        )?;

        gallery.add_gray(Stage::Laplacian, edges::laplacian(&gray))?;

        let stage_count = gallery.len();
        let gallery_dir = gallery.dir().to_path_buf();
        let (manifest_path, _manifest) =
            gallery.finish(&source.path, loaded.sha256, loaded.downscale)?;

        info!(%run_id, stage_count, "pipeline run complete");
        Ok(RunReport {
            run_id,
            gallery_dir,
            manifest_path,
            stage_count,
            notices,
        })
    }
}
