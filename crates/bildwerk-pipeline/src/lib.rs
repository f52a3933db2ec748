// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bildwerk-pipeline — The Bildwerk processing pipeline.
//
// Provides source validation (quote trimming, existence, extension allow-list),
// decode with a resolution cap, the fixed sequence of transform stages
// (grayscale, channel split, equalization, histogram plot, Canny, blurs,
// Laplacian), and the gallery writer that lays results out on disk.

pub mod gallery;
pub mod loader;
pub mod ops;
pub mod run;
pub mod source;

// Re-export the primary entry points so callers can use `bildwerk_pipeline::Pipeline` etc.
pub use gallery::RunGallery;
pub use run::{Pipeline, RunReport};
pub use source::ValidatedSource;
