//! Remove an item from a blob.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use console::style;
use warehouse_core::{Outcome, SessionAction, SessionEngine, SessionState};

use super::{ContentArgs, load_warehouse};
use crate::config::CliConfig;

/// Remove the item covering a cell and print the updated blob
#[derive(Parser)]
pub struct Remove {
    /// Blob file, or `-` for stdin
    #[arg(value_name = "BLOB")]
    input: PathBuf,

    /// Column of any cell the item covers
    #[arg(short, long)]
    x: u8,

    /// Row of any cell the item covers
    #[arg(short, long)]
    y: u8,

    #[command(flatten)]
    content: ContentArgs,
}

impl Remove {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let content = self.content.load(config)?;
        let (warehouse, _) = load_warehouse(&self.input, &content)?;

        let uid = warehouse
            .item_at(self.x, self.y)
            .map(|item| item.uid)
            .ok_or_else(|| anyhow!("no item covers cell ({}, {})", self.x, self.y))?;

        let (state, outcome) = SessionEngine::execute(
            &SessionState::new(warehouse),
            &SessionAction::remove(uid),
            &content.env(),
        )?;

        if let Outcome::Removed { uid, record } = &outcome {
            tracing::info!(uid = %uid, item = %record.item_id, "removed item");
            eprintln!(
                "{} {} from slot {}",
                style("Removed").bold().green(),
                record.item_id,
                record.position
            );
        }
        println!("{}", state.warehouse.encode()?);
        Ok(())
    }
}
