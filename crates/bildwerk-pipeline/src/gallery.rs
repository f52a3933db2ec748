// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gallery writer — lays one pipeline run out on disk as numbered, labelled
// PNGs plus a JSON manifest describing the run.

use std::path::{Path, PathBuf};

use chrono::Utc;
use image::{DynamicImage, GrayImage, RgbImage};
use tracing::{debug, info, instrument};

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::types::{Downscale, RunId, RunManifest, Stage, StageEntry};

/// Accumulates the outputs of one pipeline run in its own directory.
///
/// Stage buffers are written eagerly as `NN-slug.png`; `finish` seals the
/// run by writing `manifest.json` next to them.
#[derive(Debug)]
pub struct RunGallery {
    run_id: RunId,
    dir: PathBuf,
    entries: Vec<StageEntry>,
}

impl RunGallery {
    /// Create the per-run directory `<root>/<stem>-<short run id>/`.
    #[instrument(skip_all, fields(stem = source_stem))]
    pub fn create(root: &Path, source_stem: &str, run_id: RunId) -> Result<Self> {
        let dir = root.join(format!("{source_stem}-{}", run_id.short()));
        std::fs::create_dir_all(&dir).map_err(|err| {
            BildwerkError::Gallery(format!("creating {}: {}", dir.display(), err))
        })?;
        info!(dir = %dir.display(), "gallery directory created");

        Ok(Self {
            run_id,
            dir,
            entries: Vec::new(),
        })
    }

    /// Directory this run's outputs are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of stages written so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write one stage buffer as the next numbered PNG.
    pub fn add(&mut self, stage: Stage, image: &DynamicImage) -> Result<()> {
        let index = self.entries.len();
        let file = format!("{index:02}-{}.png", stage.slug());
        let path = self.dir.join(&file);

        image.save(&path).map_err(|err| {
            BildwerkError::Gallery(format!("{}: {}", path.display(), err))
        })?;
        debug!(file, label = stage.label(), "stage written");

        self.entries.push(StageEntry {
            index,
            stage,
            label: stage.label().to_string(),
            file,
            width: image.width(),
            height: image.height(),
            channels: image.color().channel_count(),
        });
        Ok(())
    }

    pub fn add_gray(&mut self, stage: Stage, gray: GrayImage) -> Result<()> {
        self.add(stage, &DynamicImage::ImageLuma8(gray))
    }

    pub fn add_rgb(&mut self, stage: Stage, rgb: RgbImage) -> Result<()> {
        self.add(stage, &DynamicImage::ImageRgb8(rgb))
    }

    /// Seal the run: write `manifest.json` and return its path with the
    /// manifest itself.
    pub fn finish(
        self,
        source_path: &Path,
        source_sha256: String,
        downscale: Option<Downscale>,
    ) -> Result<(PathBuf, RunManifest)> {
        let manifest = RunManifest {
            run_id: self.run_id,
            created_at: Utc::now(),
            source_path: source_path.display().to_string(),
            source_sha256,
            downscale,
            stages: self.entries,
        };

        let path = self.dir.join("manifest.json");
        let json = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(&path, json)?;
        info!(manifest = %path.display(), stages = manifest.stages.len(), "run sealed");

        Ok((path, manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn stages_land_as_numbered_pngs() {
        let root = tempfile::tempdir().unwrap();
        let mut gallery = RunGallery::create(root.path(), "photo", RunId::new()).unwrap();

        gallery
            .add_gray(Stage::Grayscale, GrayImage::from_pixel(4, 4, Luma([9])))
            .unwrap();
        gallery
            .add_gray(Stage::CannyEdges, GrayImage::new(4, 4))
            .unwrap();

        assert!(gallery.dir().join("00-grayscale.png").is_file());
        assert!(gallery.dir().join("01-canny-edges.png").is_file());
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn finish_writes_a_readable_manifest() {
        let root = tempfile::tempdir().unwrap();
        let mut gallery = RunGallery::create(root.path(), "photo", RunId::new()).unwrap();
        gallery
            .add_gray(Stage::Grayscale, GrayImage::new(8, 6))
            .unwrap();

        let (path, manifest) = gallery
            .finish(Path::new("photo.png"), "ab".repeat(32), None)
            .unwrap();

        let parsed: RunManifest =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.run_id, manifest.run_id);
        assert_eq!(parsed.stages.len(), 1);
        assert_eq!(parsed.stages[0].file, "00-grayscale.png");
        assert_eq!(parsed.stages[0].width, 8);
        assert_eq!(parsed.stages[0].channels, 1);
    }

    #[test]
    fn unwritable_root_is_a_gallery_error() {
        let err = RunGallery::create(
            Path::new("/proc/definitely-not-writable"),
            "x",
            RunId::new(),
        )
        .unwrap_err();
        assert!(matches!(err, BildwerkError::Gallery(_)));
    }
}
