//! Error types for the replacement pipeline.
//!
//! This module defines the `RetagError` enum covering every failure mode a
//! run can surface: an unrecognized spreadsheet format, an undecodable
//! spreadsheet, an invalid input archive, and working-storage I/O failures.
//! Rows missing either cell in the spreadsheet are NOT errors; the loader
//! silently drops them.

use thiserror::Error;

/// Errors that can occur while loading a mapping or processing an archive.
#[derive(Debug, Error)]
pub enum RetagError {
    /// Spreadsheet extension is neither `.xls` nor `.xlsx`.
    #[error("Unsupported spreadsheet format '.{extension}': expected .xls or .xlsx")]
    UnsupportedFormat {
        /// Lowercased extension of the rejected file
        extension: String,
    },

    /// Spreadsheet content could not be decoded.
    #[error("Failed to parse replacement spreadsheet: {message}")]
    Parse {
        /// Detailed error message from the workbook reader
        message: String,
    },

    /// Input archive is not a valid ZIP container, or the output archive
    /// could not be assembled.
    #[error("Archive error: {message}")]
    Extraction {
        /// Detailed error message from the archive layer
        message: String,
    },

    /// I/O error against the working storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
