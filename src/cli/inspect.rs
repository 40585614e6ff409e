//! Inspect subcommand - preview the rules a mapping spreadsheet defines

use std::path::Path;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::pipeline::load_replacement_map;
use crate::utils::{create_spinner, finish_with_success, print_info};

/// Load a mapping spreadsheet and print its rules as a table
pub fn run_inspect(mapping: &Path) -> Result<()> {
    let spinner = create_spinner("Loading replacement mapping...");
    let map = load_replacement_map(mapping)?;
    finish_with_success(
        &spinner,
        &format!("Loaded {} rule(s) from {}", map.len(), mapping.display()),
    );

    if map.is_empty() {
        print_info("The spreadsheet defines no replacement rules.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Original").add_attribute(Attribute::Bold),
        Cell::new("Replacement").add_attribute(Attribute::Bold),
    ]);

    for (index, (original, replacement)) in map.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(original),
            Cell::new(replacement),
        ]);
    }

    println!();
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
    println!();
    println!(
        "    {}",
        style("Rules apply in the order shown above.").dim()
    );

    Ok(())
}
