//! Retag: Drawing Package Replacement Library
//!
//! A library for applying spreadsheet-driven text replacements
//! line-by-line across DXF drawing files packaged in ZIP archives.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
