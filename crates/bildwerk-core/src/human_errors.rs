// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The binary prints these instead of Debug/Display dumps of the raw error.

use crate::error::BildwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Might succeed on a straight retry (I/O hiccup, full disk freed up).
    Transient,
    /// User must do something (fix the path, pick another file).
    ActionRequired,
    /// Cannot be fixed by retrying or user action on this file.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `BildwerkError` into a `HumanError`.
pub fn humanize_error(err: &BildwerkError) -> HumanError {
    match err {
        BildwerkError::SourceNotFound(path) => HumanError {
            message: "File not found. Check the path.".into(),
            suggestion: format!("No file exists at \"{path}\". Check for typos, or drag the file into the terminal to paste its full path."),
            severity: Severity::ActionRequired,
        },

        BildwerkError::UnsupportedFormat(ext) => HumanError {
            message: "Unsupported file format. Please use .jpg, .png, .bmp, or .tiff.".into(),
            suggestion: format!("\"{ext}\" isn't a supported image type. Convert the file to JPEG or PNG first."),
            severity: Severity::Permanent,
        },

        BildwerkError::DecodeFailed(detail) => HumanError {
            message: "Failed to read the image. Check the file path or format.".into(),
            suggestion: format!("The file may be damaged or mislabelled. Try opening it in another viewer to check it works. ({detail})"),
            severity: Severity::Permanent,
        },

        BildwerkError::ImageError(detail) => HumanError {
            message: "A processing step failed on this image.".into(),
            suggestion: format!("Try a different image. ({detail})"),
            severity: Severity::Permanent,
        },

        BildwerkError::Gallery(detail) => HumanError {
            message: "The results couldn't be written to disk.".into(),
            suggestion: format!("Check that the output directory is writable and has free space. ({detail})"),
            severity: Severity::Transient,
        },

        BildwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again.".into(),
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "No permission to read or write that file.".into(),
                    suggestion: "Check the file permissions, or copy the file somewhere you own first.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    severity: Severity::Transient,
                }
            }
        }

        BildwerkError::Serialization(_) => HumanError {
            message: "The run manifest couldn't be written.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            severity: Severity::Transient,
        },
    }
}
