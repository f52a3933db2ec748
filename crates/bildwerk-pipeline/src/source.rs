// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Source validation — quote trimming, existence check, and the extension
// allow-list. Nothing is decoded until validation passes.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::types::SourceFormat;

/// A source path that has passed validation and is ready to decode.
#[derive(Debug, Clone)]
pub struct ValidatedSource {
    pub path: PathBuf,
    pub format: SourceFormat,
}

impl ValidatedSource {
    /// File stem of the source, used to name the gallery directory.
    /// Falls back to "image" for pathological names.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".into())
    }
}

/// Strip surrounding whitespace and a single layer of matching quotes.
///
/// Paths pasted from file managers and shells commonly arrive wrapped in
/// double or single quotes.
pub fn trim_quotes(raw: &str) -> &str {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Validate a raw path string from the user.
///
/// Checks, in order: the path references an existing regular file, and its
/// extension is on the allow-list (.jpg, .jpeg, .png, .bmp, .tif, .tiff,
/// case-insensitive).
#[instrument(skip_all, fields(raw = %raw))]
pub fn validate(raw: &str) -> Result<ValidatedSource> {
    let cleaned = trim_quotes(raw);
    let path = Path::new(cleaned);

    if !path.is_file() {
        return Err(BildwerkError::SourceNotFound(cleaned.to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    let format = SourceFormat::from_extension(&ext)
        .ok_or_else(|| BildwerkError::UnsupportedFormat(ext.clone()))?;

    debug!(path = %path.display(), ?format, "source validated");
    Ok(ValidatedSource {
        path: path.to_path_buf(),
        format,
    })
}
