//! Encode a JSON record list into a blob.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use warehouse_core::{ItemRecord, WarehouseCodec};

use super::ContentArgs;
use crate::config::CliConfig;
use crate::input;

/// Encode a JSON array of records (as printed by `decode --format json`)
#[derive(Parser)]
pub struct Encode {
    /// JSON file, or `-` for stdin
    #[arg(value_name = "JSON")]
    input: PathBuf,

    #[command(flatten)]
    content: ContentArgs,
}

impl Encode {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let codec_config = self
            .content
            .factory(config)
            .load_config()
            .context("Failed to load warehouse config")?;

        let json = input::read_source(&self.input)?;
        let records: Vec<ItemRecord> =
            serde_json::from_str(&json).context("Failed to parse records JSON")?;

        let blob = WarehouseCodec::new(codec_config).encode(&records)?;
        tracing::info!(records = records.len(), bytes = blob.len(), "encoded blob");
        println!("{}", blob);
        Ok(())
    }
}
