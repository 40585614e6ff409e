//! Replacement mapping loader for .xls and .xlsx spreadsheets
//!
//! The mapping is an explicit ordered list of (original, replacement) pairs
//! rather than a hash map: entry order is the source row order, and that
//! order is contractual because substring replacement cascades (see
//! `rewrite_line`).

use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};

use crate::pipeline::error::RetagError;

/// Ordered original -> replacement text pairs.
///
/// Keys are unique and non-empty after trimming. Inserting a duplicate key
/// overwrites the value in place, keeping the key's original position, so
/// iteration order always matches first appearance in the source spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<(String, String)>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair. A duplicate key keeps its position and takes the new value.
    pub fn insert(&mut self, original: impl Into<String>, replacement: impl Into<String>) {
        let original = original.into();
        let replacement = replacement.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == original) {
            entry.1 = replacement;
        } else {
            self.entries.push((original, replacement));
        }
    }

    /// Look up the replacement for an exact key.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == original)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate pairs in source row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a replacement mapping from a spreadsheet (.xls or .xlsx by extension).
///
/// Only the first sheet is read. The header row is skipped; each remaining
/// row contributes the trimmed text of its first two cells. Rows where either
/// cell is missing or blank after trimming are silently dropped.
pub fn load_replacement_map(path: &Path) -> Result<ReplacementMap, RetagError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let range = match extension.as_str() {
        "xlsx" => {
            let mut workbook: Xlsx<_> = open_workbook(path).map_err(parse_error)?;
            first_sheet(workbook.worksheet_range_at(0))?
        }
        "xls" => {
            let mut workbook: Xls<_> = open_workbook(path).map_err(parse_error)?;
            first_sheet(workbook.worksheet_range_at(0))?
        }
        _ => return Err(RetagError::UnsupportedFormat { extension }),
    };

    Ok(map_from_range(&range))
}

fn first_sheet<E: std::fmt::Display>(
    range: Option<Result<Range<Data>, E>>,
) -> Result<Range<Data>, RetagError> {
    range
        .ok_or_else(|| RetagError::Parse {
            message: "workbook contains no sheets".to_string(),
        })?
        .map_err(parse_error)
}

fn parse_error<E: std::fmt::Display>(err: E) -> RetagError {
    RetagError::Parse {
        message: err.to_string(),
    }
}

fn map_from_range(range: &Range<Data>) -> ReplacementMap {
    let mut map = ReplacementMap::new();
    for row in range.rows().skip(1) {
        let original = cell_text(row.first());
        let replacement = cell_text(row.get(1));
        if let (Some(original), Some(replacement)) = (original, replacement) {
            map.insert(original, replacement);
        }
    }
    map
}

/// Coerce a cell to trimmed text; empty and blank cells yield None.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    let cell = cell?;
    if matches!(cell, Data::Empty) {
        return None;
    }
    let text = cell.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
