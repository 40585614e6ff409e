//! JSON run report generation
//!
//! Optional machine-readable record of a batch run: which spreadsheet drove
//! it, which archive it rewrote, and what happened to every drawing.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{BatchReport, FileReport};

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub timestamp: String,
    pub retag_version: String,
    pub mapping_file: String,
    pub archive_file: String,
    pub output_file: String,
    pub rules: usize,
}

/// Run-level totals
#[derive(Debug, Clone, Serialize)]
pub struct RunTotals {
    pub archive_entries: usize,
    pub drawings: usize,
    pub lines_scanned: usize,
    pub lines_changed: usize,
    pub whole_line_matches: usize,
}

/// Complete run report
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub metadata: RunMetadata,
    pub totals: RunTotals,
    pub files: Vec<FileReport>,
}

/// Parameters for assembling a RunReport
pub struct RunReportParams {
    pub mapping_file: String,
    pub archive_file: String,
    pub output_file: String,
    pub rules: usize,
}

impl RunReport {
    pub fn new(params: RunReportParams, batch: &BatchReport) -> Self {
        Self {
            metadata: RunMetadata {
                timestamp: Utc::now().to_rfc3339(),
                retag_version: env!("CARGO_PKG_VERSION").to_string(),
                mapping_file: params.mapping_file,
                archive_file: params.archive_file,
                output_file: params.output_file,
                rules: params.rules,
            },
            totals: RunTotals {
                archive_entries: batch.entries_total,
                drawings: batch.drawings(),
                lines_scanned: batch.lines_scanned(),
                lines_changed: batch.lines_changed(),
                whole_line_matches: batch.whole_line_matches(),
            },
            files: batch.files.clone(),
        }
    }
}

/// Export the run report to a JSON file
pub fn export_run_report(report: &RunReport, output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize run report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write run report to {}", output_path.display()))?;

    Ok(())
}
