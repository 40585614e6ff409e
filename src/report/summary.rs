//! Batch summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::BatchReport;

/// Summary of one batch replacement run
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub entries_total: usize,
    pub drawings: usize,
    pub lines_scanned: usize,
    pub lines_changed: usize,
    pub whole_line_matches: usize,
    /// (output name, lines changed) for each drawing that was modified
    pub changed_files: Vec<(String, usize)>,
    pub load_time: Duration,
    pub process_time: Duration,
}

impl BatchSummary {
    pub fn from_report(report: &BatchReport) -> Self {
        Self {
            entries_total: report.entries_total,
            drawings: report.drawings(),
            lines_scanned: report.lines_scanned(),
            lines_changed: report.lines_changed(),
            whole_line_matches: report.whole_line_matches(),
            changed_files: report
                .files
                .iter()
                .filter(|f| f.lines_changed > 0)
                .map(|f| (f.output.clone(), f.lines_changed))
                .collect(),
            ..Default::default()
        }
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_process_time(&mut self, elapsed: Duration) {
        self.process_time = elapsed;
    }

    pub fn total_time(&self) -> Duration {
        self.load_time + self.process_time
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BATCH SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📦 Archive entries"),
            Cell::new(self.entries_total),
        ]);

        table.add_row(vec![
            Cell::new("📐 Drawings rewritten"),
            Cell::new(self.drawings).fg(if self.drawings == 0 {
                Color::Yellow
            } else {
                Color::Green
            }),
        ]);

        table.add_row(vec![
            Cell::new("📄 Lines scanned"),
            Cell::new(self.lines_scanned),
        ]);

        table.add_row(vec![
            Cell::new("✏️  Lines changed"),
            Cell::new(self.lines_changed)
                .fg(if self.lines_changed == 0 {
                    Color::White
                } else {
                    Color::Green
                })
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🎯 Whole-line matches"),
            Cell::new(self.whole_line_matches),
        ]);

        let changed_pct = if self.lines_scanned > 0 {
            (self.lines_changed as f64 / self.lines_scanned as f64) * 100.0
        } else {
            0.0
        };

        table.add_row(vec![
            Cell::new("📉 Changed share"),
            Cell::new(format!("{:.1}%", changed_pct)).fg(Color::Cyan),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Total time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.changed_files.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("CHANGED DRAWINGS").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            for (name, lines_changed) in &self.changed_files {
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    name,
                    style(format!("({} line(s))", lines_changed)).dim()
                );
            }
        }
    }
}
