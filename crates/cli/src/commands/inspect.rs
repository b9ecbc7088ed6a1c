//! Show the warehouse grid and item details.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use warehouse_core::{ItemSummary, ItemUid, LoadReport, Warehouse, describe_item};

use super::decode::record_line;
use super::{ContentArgs, load_warehouse};
use crate::config::CliConfig;

/// Show the warehouse grid and describe every item
#[derive(Parser)]
pub struct Inspect {
    /// Blob file, or `-` for stdin
    #[arg(value_name = "BLOB")]
    input: PathBuf,

    #[command(flatten)]
    content: ContentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Grid map followed by hover cards
    Summary,
    /// JSON array of item summaries
    Json,
}

impl Inspect {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let content = self.content.load(config)?;
        let (warehouse, report) = load_warehouse(&self.input, &content)?;
        let env = content.env();

        let summaries = warehouse
            .items()
            .iter()
            .map(|item| describe_item(item, &env))
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to describe items")?;
        tracing::info!(
            items = warehouse.len(),
            orphans = warehouse.orphans().len(),
            "loaded warehouse"
        );

        match self.format {
            OutputFormat::Summary => print_summary(&warehouse, &summaries, &report),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&summaries)
                    .context("Failed to serialize summaries to JSON")?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}

const LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn label(index: usize) -> char {
    LABELS[index % LABELS.len()] as char
}

fn print_summary(warehouse: &Warehouse, summaries: &[ItemSummary], report: &LoadReport) {
    let labels: HashMap<ItemUid, char> = summaries
        .iter()
        .enumerate()
        .map(|(index, summary)| (summary.uid, label(index)))
        .collect();

    println!("{}", style("Warehouse:").bold().cyan());
    for row in warehouse.grid().rows() {
        let cells: String = row
            .iter()
            .map(|cell| match cell {
                Some(uid) => labels.get(uid).copied().unwrap_or('?'),
                None => '.',
            })
            .collect();
        println!("  {}", cells);
    }
    println!(
        "  {} used, {} free",
        warehouse.used_slots(),
        warehouse.available_slots()
    );

    for (index, summary) in summaries.iter().enumerate() {
        println!();
        println!(
            "{} {} at {}",
            style(format!("[{}]", label(index))).bold().green(),
            style(summary.uid).dim(),
            summary.position
        );
        println!("{}", summary);
    }

    if !warehouse.orphans().is_empty() {
        println!();
        println!("{}", style("Orphaned records:").bold().yellow());
        for (record, orphan) in warehouse.orphans().iter().zip(&report.orphaned) {
            println!("  {}  ({})", record_line(record), orphan.reason);
        }
    }
    if !report.unknown_items.is_empty() {
        println!();
        println!("{}", style("Not in catalog:").bold().yellow());
        for item in &report.unknown_items {
            println!("  {}", item);
        }
    }
}
