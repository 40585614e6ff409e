//! Shared test fixtures: mapping spreadsheets and ZIP archives

#![allow(dead_code)]

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Write a mapping spreadsheet with a header row followed by the given
/// (original, replacement) rows. None leaves the cell empty.
pub fn write_mapping_xlsx(path: &Path, rows: &[(Option<&str>, Option<&str>)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Original").unwrap();
    worksheet.write_string(0, 1, "Replacement").unwrap();

    for (index, (original, replacement)) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        if let Some(text) = original {
            worksheet.write_string(row, 0, *text).unwrap();
        }
        if let Some(text) = replacement {
            worksheet.write_string(row, 1, *text).unwrap();
        }
    }

    workbook.save(path).unwrap();
}

/// Create a mapping spreadsheet in a fresh temp directory.
/// Returns the directory guard alongside the file path.
pub fn temp_mapping_xlsx(rows: &[(Option<&str>, Option<&str>)]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapping.xlsx");
    write_mapping_xlsx(&path, rows);
    (dir, path)
}

/// Write a ZIP archive with the given (entry name, bytes) pairs.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }

    writer.finish().unwrap();
}

/// Read a ZIP archive back as (entry name, bytes) pairs, sorted by name.
pub fn read_zip(path: &Path) -> Vec<(String, Vec<u8>)> {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = ZipArchive::new(file).unwrap();

    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        entries.push((entry.name().to_string(), content));
    }
    entries.sort();
    entries
}

/// Encode text as Windows-1252 bytes.
pub fn latin1(text: &str) -> Vec<u8> {
    let (encoded, _, _) = encoding_rs::WINDOWS_1252.encode(text);
    encoded.into_owned()
}
