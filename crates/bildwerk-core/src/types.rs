// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Bildwerk pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short prefix used in gallery directory names.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported source image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Jpeg,
    Png,
    Bmp,
    Tiff,
}

impl SourceFormat {
    /// Infer the source format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    /// Extensions accepted by the pipeline, for user-facing messages.
    pub fn allowed_extensions() -> &'static [&'static str] {
        &["jpg", "jpeg", "png", "bmp", "tif", "tiff"]
    }
}

/// The stages of the fixed processing sequence, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Original,
    Grayscale,
    RedChannel,
    GreenChannel,
    BlueChannel,
    Equalized,
    HistogramPlot,
    CannyEdges,
    GaussianBlur,
    BoxBlur,
    Laplacian,
}

impl Stage {
    /// Human-readable label, used as the gallery caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Original => "Original Image",
            Self::Grayscale => "Grayscale Image",
            Self::RedChannel => "Red Channel",
            Self::GreenChannel => "Green Channel",
            Self::BlueChannel => "Blue Channel",
            Self::Equalized => "Equalized Grayscale Image",
            Self::HistogramPlot => "Gray Image Histogram",
            Self::CannyEdges => "Canny Edge Detection",
            Self::GaussianBlur => "Gaussian Blur",
            Self::BoxBlur => "Smoothing",
            Self::Laplacian => "Laplacian Filter",
        }
    }

    /// Kebab-case slug used in gallery file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Grayscale => "grayscale",
            Self::RedChannel => "red-channel",
            Self::GreenChannel => "green-channel",
            Self::BlueChannel => "blue-channel",
            Self::Equalized => "equalized",
            Self::HistogramPlot => "histogram",
            Self::CannyEdges => "canny-edges",
            Self::GaussianBlur => "gaussian-blur",
            Self::BoxBlur => "box-blur",
            Self::Laplacian => "laplacian",
        }
    }
}

/// One gallery entry in the run manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageEntry {
    /// Position in the pipeline sequence (and file name prefix).
    pub index: usize,
    pub stage: Stage,
    pub label: String,
    /// File name within the gallery directory.
    pub file: String,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

/// Downscale record for oversized sources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Downscale {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

/// Manifest describing one complete pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub created_at: DateTime<Utc>,
    /// Path of the source file as given by the user (after quote trimming).
    pub source_path: String,
    /// SHA-256 of the source file bytes.
    pub source_sha256: String,
    /// Present when the source exceeded the resolution cap.
    pub downscale: Option<Downscale>,
    /// Stages actually produced, in pipeline order.
    pub stages: Vec<StageEntry>,
}
