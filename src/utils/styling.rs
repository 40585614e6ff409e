//! Terminal styling utilities for a modern, visually appealing TUI

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static TABLE: Emoji<'_, '_> = Emoji("📋 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static PENCIL: Emoji<'_, '_> = Emoji("✏️  ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ███████╗████████╗ █████╗  ██████╗
    ██╔══██╗██╔════╝╚══██╔══╝██╔══██╗██╔════╝
    ██████╔╝█████╗     ██║   ███████║██║  ███╗
    ██╔══██╗██╔══╝     ██║   ██╔══██║██║   ██║
    ██║  ██║███████╗   ██║   ██║  ██║╚██████╔╝
    ╚═╝  ╚═╝╚══════╝   ╚═╝   ╚═╝  ╚═╝ ╚═════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("✎").magenta().bold(),
        style("Batch find/replace for drawing packages").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(
    mapping: &Path,
    archive: &Path,
    output: &Path,
    extension: &str,
    prefix: &str,
) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Mapping: {:<38}│",
        TABLE,
        truncate_path(mapping, 37)
    );
    println!(
        "    │  {} Archive: {:<38}│",
        PACKAGE,
        truncate_path(archive, 37)
    );
    println!(
        "    │  {} Output:  {:<38}│",
        SAVE,
        truncate_path(output, 37)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Drawing extension: {:<28}│",
        FOLDER,
        style(format!(".{}", extension)).yellow()
    );
    println!(
        "    │  {} Output prefix:     {:<28}│",
        PENCIL,
        style(prefix).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the elapsed time for a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "      {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Retag run complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, extra_info: Option<&str>) {
    if let Some(info) = extra_info {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}
