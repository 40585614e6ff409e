//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Retag - Batch find/replace across drawing files in a ZIP package
#[derive(Parser, Debug)]
#[command(name = "retag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Replacement mapping spreadsheet (XLSX or XLS).
    /// Column A holds the original text, column B the replacement.
    /// If not provided, will be selected interactively.
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Input ZIP archive containing the drawing files.
    /// If not provided, will be selected interactively.
    #[arg(short, long)]
    pub archive: Option<PathBuf>,

    /// Output ZIP path.
    /// Defaults to the archive directory with an '_updated' suffix
    /// (e.g., drawings.zip -> drawings_updated.zip).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extension identifying drawing files inside the archive
    #[arg(long, default_value = "dxf")]
    pub extension: String,

    /// Prefix prepended to each rewritten drawing's file name
    #[arg(long, default_value = "updated_")]
    pub prefix: String,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Write a JSON run report next to the output archive
    #[arg(long, default_value = "false")]
    pub report: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the replacement rules a mapping spreadsheet defines
    Inspect {
        /// Replacement mapping spreadsheet (XLSX or XLS)
        mapping: PathBuf,
    },
}

impl Cli {
    /// Get the output path, deriving from the archive if not explicitly provided.
    /// The derived path will be in the same directory as the archive with an
    /// '_updated' suffix.
    pub fn output_path(&self, archive: &Path) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = archive.parent().unwrap_or_else(|| Path::new("."));
            let stem = archive
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            parent.join(format!("{}_updated.zip", stem))
        })
    }

    /// Get the JSON run report path, derived from the output archive.
    pub fn report_path(&self, output: &Path) -> PathBuf {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        parent.join(format!("{}_report.json", stem))
    }
}
