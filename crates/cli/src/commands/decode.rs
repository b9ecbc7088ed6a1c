//! Decode a blob and list its records.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use warehouse_core::{DecodeReport, ItemRecord, WarehouseCodec, WarehouseConfig};

use super::{ContentArgs, log_decode_report};
use crate::config::CliConfig;
use crate::input;

/// Decode a blob and list its records
#[derive(Parser)]
pub struct Decode {
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
    /// One line per record, plus dropped chunks
    Summary,
    /// JSON array of records
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Decode {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let codec_config = self
            .content
            .factory(config)
            .load_config()
            .context("Failed to load warehouse config")?;

        let blob = input::read_blob(&self.input)?;
        let report = WarehouseCodec::new(codec_config).decode_with_report(&blob);
        log_decode_report(&report);
        tracing::info!(
            records = report.records.len(),
            dropped = report.dropped.len(),
            "decoded blob"
        );

        match self.format {
            OutputFormat::Summary => print_summary(&report, &codec_config),
            OutputFormat::Json => print_json(&report.records)?,
            OutputFormat::Debug => println!("{:#?}", report.records),
        }
        Ok(())
    }
}

fn print_summary(report: &DecodeReport, config: &WarehouseConfig) {
    println!(
        "{} {} ({} dropped, {} legacy, mask policy {})",
        style("Records:").bold().cyan(),
        report.records.len(),
        report.dropped.len(),
        report.legacy_records,
        config.mask_policy
    );
    for record in &report.records {
        println!("  {}", record_line(record));
    }
    if !report.dropped.is_empty() {
        println!();
        println!("{}", style("Dropped:").bold().yellow());
        for dropped in &report.dropped {
            println!("  chunk {}: {}", dropped.index, dropped.error);
        }
    }
    if let Some(error) = &report.blob_error {
        println!("{} {}", style("Blob error:").bold().red(), error);
    }
}

pub(crate) fn record_line(record: &ItemRecord) -> String {
    let (x, y) = record.position.coords();
    let mut line = format!(
        "slot {:>3} ({},{:>2})  item {:<14} +{:<2} dur {:>3}",
        record.position.index(),
        x,
        y,
        record.item_id.to_string(),
        record.level,
        record.durability
    );
    if record.skill {
        line.push_str("  skill");
    }
    if record.luck {
        line.push_str("  luck");
    }
    if record.option_tier > 0 {
        line.push_str(&format!("  opt+{}", record.additional_option_value()));
    }
    if !record.excellent.is_empty() {
        line.push_str(&format!("  exc {}", record.excellent.count()));
    }
    if record.mastery_set {
        line.push_str(&format!("  set {}", record.mastery_bonus));
    }
    line
}

fn print_json(records: &[ItemRecord]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(records).context("Failed to serialize records to JSON")?;
    println!("{}", json);
    Ok(())
}
