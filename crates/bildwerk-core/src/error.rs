// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bildwerk.

use thiserror::Error;

/// Top-level error type for all Bildwerk operations.
#[derive(Debug, Error)]
pub enum BildwerkError {
    // -- Source validation --
    #[error("file not found: {0}")]
    SourceNotFound(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    // -- Decode / transform --
    #[error("image decode failed: {0}")]
    DecodeFailed(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Gallery output --
    #[error("gallery write failed: {0}")]
    Gallery(String),

    // -- Ambient --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BildwerkError>;
