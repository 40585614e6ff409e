//! Retag: Drawing Package Replacement CLI Tool
//!
//! A command-line tool for applying spreadsheet-driven find/replace
//! rules to drawing files packaged in a ZIP archive.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::{confirm_run, pick_file, Cli, Commands};
use pipeline::{load_replacement_map, process_archive_with_progress, BatchOptions};
use report::{export_run_report, BatchSummary, RunReport, RunReportParams};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Inspect { mapping } => cli::inspect::run_inspect(mapping),
        };
    }

    // Resolve the mapping spreadsheet and drawing archive, prompting
    // interactively for anything the flags left out.
    let mapping = match resolve_input(
        cli.mapping.clone(),
        cli.no_confirm,
        "Select replacement mapping spreadsheet",
        &["xlsx", "xls"],
        "Mapping spreadsheet is required. Use -m/--mapping to specify a file.",
    )? {
        Some(path) => path,
        None => {
            println!("Cancelled by user.");
            return Ok(());
        }
    };

    let archive = match resolve_input(
        cli.archive.clone(),
        cli.no_confirm,
        "Select drawing archive",
        &["zip"],
        "Drawing archive is required. Use -a/--archive to specify a file.",
    )? {
        Some(path) => path,
        None => {
            println!("Cancelled by user.");
            return Ok(());
        }
    };

    let output_path = cli.output_path(&archive);

    let options = BatchOptions {
        drawing_extension: cli.extension.clone(),
        output_prefix: cli.prefix.clone(),
    };

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(
        &mapping,
        &archive,
        &output_path,
        &options.drawing_extension,
        &options.output_prefix,
    );

    // Step 1: Load replacement mapping
    print_step_header(1, "Load Replacement Mapping");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading spreadsheet...");
    let map = load_replacement_map(&mapping)?;
    finish_with_success(&spinner, "Mapping loaded");
    print_count("replacement rule(s)", map.len(), None);
    if map.is_empty() {
        print_info("No rules defined; drawings will be copied unchanged.");
    }
    let load_elapsed = step_start.elapsed();
    print_step_time(load_elapsed);

    // Confirm before touching the archive unless --no-confirm is set
    if !cli.no_confirm && !confirm_run(map.len(), &archive)? {
        println!("Cancelled by user.");
        return Ok(());
    }

    // Step 2: Rewrite drawings
    print_step_header(2, "Rewrite Drawings");
    let step_start = Instant::now();
    println!(); // Blank line before progress bar
    let batch = process_archive_with_progress(&archive, &output_path, &map, &options)?;
    print_success(&format!("Saved to {}", output_path.display()));
    if batch.files.is_empty() {
        print_info(&format!(
            "No .{} files found in the archive; output contains no drawings.",
            options.drawing_extension
        ));
    }
    let process_elapsed = step_start.elapsed();
    print_step_time(process_elapsed);

    // Step 3: Export run report (optional)
    if cli.report {
        print_step_header(3, "Export Run Report");
        let report_path = cli.report_path(&output_path);
        let run_report = RunReport::new(
            RunReportParams {
                mapping_file: mapping.display().to_string(),
                archive_file: archive.display().to_string(),
                output_file: output_path.display().to_string(),
                rules: map.len(),
            },
            &batch,
        );
        export_run_report(&run_report, &report_path)?;
        print_success(&format!("Report written to {}", report_path.display()));
    }

    // Final summary
    let mut summary = BatchSummary::from_report(&batch);
    summary.set_load_time(load_elapsed);
    summary.set_process_time(process_elapsed);
    summary.display();

    print_completion();

    Ok(())
}

/// Resolve a required input path from a flag or the interactive picker.
///
/// Returns Ok(None) when the user cancels the picker.
fn resolve_input(
    flag: Option<PathBuf>,
    no_confirm: bool,
    prompt: &str,
    extensions: &[&str],
    missing_message: &str,
) -> Result<Option<PathBuf>> {
    if let Some(path) = flag {
        return Ok(Some(path));
    }
    if no_confirm {
        anyhow::bail!("{}", missing_message);
    }
    pick_file(prompt, extensions)
}
