//! Batch processor: archive in, rewritten archive out.
//!
//! Extracts the input ZIP into a scoped temporary directory, rewrites every
//! drawing entry line-by-line, and bundles only the rewritten files into the
//! output ZIP. The temporary directory is released on every exit path. The
//! run is fail-fast: the first error aborts the batch and no partial output
//! archive is offered.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::pipeline::error::RetagError;
use crate::pipeline::mapping::ReplacementMap;
use crate::pipeline::rewrite::rewrite_line;
use crate::utils::create_progress_bar;

/// Knobs for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Drawing file extension, matched case-insensitively against entry names.
    pub drawing_extension: String,
    /// Prefix prepended to each rewritten file name in the output archive.
    pub output_prefix: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            drawing_extension: "dxf".to_string(),
            output_prefix: "updated_".to_string(),
        }
    }
}

/// Per-drawing outcome of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Entry name in the input archive
    pub source: String,
    /// Entry name in the output archive
    pub output: String,
    /// Total lines scanned
    pub lines: usize,
    /// Lines whose rewritten form differs from the input line
    pub lines_changed: usize,
    /// Lines that hit the whole-line replacement rule
    pub whole_line_matches: usize,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Number of entries in the input archive, drawings or not
    pub entries_total: usize,
    /// One entry per processed drawing, in processing order
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn drawings(&self) -> usize {
        self.files.len()
    }

    pub fn lines_scanned(&self) -> usize {
        self.files.iter().map(|f| f.lines).sum()
    }

    pub fn lines_changed(&self) -> usize {
        self.files.iter().map(|f| f.lines_changed).sum()
    }

    pub fn whole_line_matches(&self) -> usize {
        self.files.iter().map(|f| f.whole_line_matches).sum()
    }
}

/// Process an archive quietly (no terminal output). See module docs.
pub fn process_archive(
    input: &Path,
    output: &Path,
    map: &ReplacementMap,
    options: &BatchOptions,
) -> Result<BatchReport, RetagError> {
    run(input, output, map, options, false)
}

/// Process an archive with an indicatif progress bar over the drawing entries.
pub fn process_archive_with_progress(
    input: &Path,
    output: &Path,
    map: &ReplacementMap,
    options: &BatchOptions,
) -> Result<BatchReport, RetagError> {
    run(input, output, map, options, true)
}

fn run(
    input: &Path,
    output: &Path,
    map: &ReplacementMap,
    options: &BatchOptions,
    show_progress: bool,
) -> Result<BatchReport, RetagError> {
    let file = File::open(input)?;
    let mut archive = ZipArchive::new(file).map_err(extraction_error)?;

    // Scoped working directory, released on every exit path.
    let workdir = tempfile::tempdir()?;
    archive.extract(workdir.path()).map_err(extraction_error)?;

    let suffix = format!(".{}", options.drawing_extension.to_lowercase());
    let mut drawing_names: Vec<String> = archive
        .file_names()
        .filter(|name| name.to_lowercase().ends_with(&suffix))
        .map(String::from)
        .collect();
    drawing_names.sort();

    let bar = show_progress
        .then(|| create_progress_bar(drawing_names.len() as u64, "Rewriting drawings"));

    let mut report = BatchReport {
        entries_total: archive.len(),
        files: Vec::with_capacity(drawing_names.len()),
    };

    for name in &drawing_names {
        let file_report = rewrite_drawing(workdir.path(), name, map, options)?;
        report.files.push(file_report);
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_with_message(format!("Rewrote {} drawing(s)", report.drawings()));
    }

    write_output_archive(workdir.path(), output, &report)?;
    Ok(report)
}

/// Rewrite one extracted drawing and write its `updated_` sibling.
fn rewrite_drawing(
    workdir: &Path,
    name: &str,
    map: &ReplacementMap,
    options: &BatchOptions,
) -> Result<FileReport, RetagError> {
    let raw = std::fs::read(workdir.join(name))?;
    let (decoded, _, _) = WINDOWS_1252.decode(&raw);

    let lines = split_lines(&decoded);
    let mut rewritten_lines = Vec::with_capacity(lines.len());
    let mut lines_changed = 0;
    let mut whole_line_matches = 0;
    for line in &lines {
        if map.get(line.trim()).is_some() {
            whole_line_matches += 1;
        }
        let rewritten = rewrite_line(line, map);
        if rewritten != *line {
            lines_changed += 1;
        }
        rewritten_lines.push(rewritten);
    }

    // Canonical CRLF after every line, the last one included.
    let mut joined = rewritten_lines.join("\r\n");
    joined.push_str("\r\n");
    let (encoded, _, _) = WINDOWS_1252.encode(&joined);

    let basename = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name);
    let output_name = format!("{}{}", options.output_prefix, basename);
    std::fs::write(workdir.join(&output_name), &encoded)?;

    Ok(FileReport {
        source: name.to_string(),
        output: output_name,
        lines: lines.len(),
        lines_changed,
        whole_line_matches,
    })
}

/// Bundle the rewritten files, and only those, into the output archive.
fn write_output_archive(
    workdir: &Path,
    output: &Path,
    report: &BatchReport,
) -> Result<(), RetagError> {
    let out_file = File::create(output)?;
    let mut writer = ZipWriter::new(out_file);
    let zip_options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for file in &report.files {
        writer
            .start_file(file.output.as_str(), zip_options)
            .map_err(extraction_error)?;
        let content = std::fs::read(workdir.join(&file.output))?;
        writer.write_all(&content)?;
    }

    writer.finish().map_err(extraction_error)?;
    Ok(())
}

fn extraction_error(err: zip::result::ZipError) -> RetagError {
    RetagError::Extraction {
        message: err.to_string(),
    }
}

/// Split on `\n`, `\r\n`, or lone `\r`. A trailing terminator yields no
/// trailing empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_preserves_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
    }
}
