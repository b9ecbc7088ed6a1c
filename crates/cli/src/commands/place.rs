//! Place a new item into a blob.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use console::style;
use warehouse_content::ItemCatalog;
use warehouse_core::{
    ExcellentOptions, ItemId, ItemOracle, ItemRecord, Outcome, SessionAction, SessionEngine,
    SessionState, SlotPosition, SocketSlot, WingOption,
};

use super::{ContentArgs, load_warehouse};
use crate::config::CliConfig;

/// Place an item and print the updated blob
#[derive(Parser)]
pub struct Place {
    /// Blob file, or `-` for stdin
    #[arg(value_name = "BLOB")]
    input: PathBuf,

    /// Item id (`6180`), category and index (`12:36`), or catalog name
    #[arg(short, long)]
    item: String,

    /// Column of the top-left corner
    #[arg(short, long, allow_negative_numbers = true)]
    x: i32,

    /// Row of the top-left corner
    #[arg(short, long, allow_negative_numbers = true)]
    y: i32,

    /// Enchant level
    #[arg(long, default_value_t = 0)]
    level: u8,

    /// Durability (defaults to the catalog maximum)
    #[arg(long)]
    durability: Option<u8>,

    #[arg(long)]
    skill: bool,

    #[arg(long)]
    luck: bool,

    /// Additional option tier (value shown is tier * 4)
    #[arg(long, default_value_t = 0)]
    option_tier: u8,

    /// Number of excellent options, enabled lowest first
    #[arg(long, default_value_t = 0)]
    excellent: u8,

    /// Mark as a mastery set item with this bonus tier
    #[arg(long)]
    mastery_bonus: Option<u8>,

    /// Wing option code for the first slot
    #[arg(long)]
    wing1: Option<u8>,

    /// Wing option code for the second slot
    #[arg(long)]
    wing2: Option<u8>,

    /// Socket seed code; repeat for up to five sockets
    #[arg(long = "socket", value_name = "CODE")]
    sockets: Vec<u16>,

    #[command(flatten)]
    content: ContentArgs,
}

impl Place {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let content = self.content.load(config)?;
        let (warehouse, _) = load_warehouse(&self.input, &content)?;
        let env = content.env();

        let item_id = resolve_item(&self.item, &content.items)?;
        let record = self.build_record(item_id, &content.items)?;

        let actions = [
            SessionAction::begin(record),
            SessionAction::place_at(self.x, self.y),
        ];
        let (state, outcomes) =
            SessionEngine::execute_all(&SessionState::new(warehouse), &actions, &env)?;

        if let Some(Outcome::Placed { uid, position }) = outcomes.last() {
            tracing::info!(uid = %uid, position = %position, item = %item_id, "placed item");
            eprintln!(
                "{} {} at slot {}",
                style("Placed").bold().green(),
                item_id,
                position
            );
        }
        println!("{}", state.warehouse.encode()?);
        Ok(())
    }

    fn build_record(&self, item_id: ItemId, items: &ItemCatalog) -> Result<ItemRecord> {
        if self.sockets.len() > 5 {
            bail!("at most 5 sockets, got {}", self.sockets.len());
        }
        let durability = match self.durability {
            Some(durability) => durability,
            None => items
                .definition(item_id)
                .map(|definition| definition.max_durability)
                .unwrap_or_default(),
        };
        let excellent = ExcellentOptions::from_count(self.excellent)
            .ok_or_else(|| anyhow!("excellent count must be 0..=6, got {}", self.excellent))?;

        let mut sockets = [SocketSlot::NoSlot; 5];
        for (slot, code) in sockets.iter_mut().zip(&self.sockets) {
            *slot = SocketSlot::from_code(*code);
        }
        let wings = [
            self.wing1.map_or(WingOption::None, WingOption::from_code),
            self.wing2.map_or(WingOption::None, WingOption::from_code),
        ];

        let mut record = ItemRecord::new(SlotPosition::ORIGIN, item_id)
            .with_level(self.level)
            .with_durability(durability)
            .with_skill(self.skill)
            .with_luck(self.luck)
            .with_option_tier(self.option_tier)
            .with_excellent(excellent)
            .with_wing_options(wings)
            .with_sockets(sockets);
        if let Some(bonus) = self.mastery_bonus {
            record = record.with_mastery(bonus);
        }
        Ok(record)
    }
}

/// Accepts a raw id, a `category:index` pair or a catalog name.
fn resolve_item(input: &str, items: &ItemCatalog) -> Result<ItemId> {
    if let Ok(raw) = input.parse::<u32>() {
        return Ok(ItemId(raw));
    }
    if let Some((category, index)) = input.split_once(':') {
        let category = category.trim().parse().context("invalid item category")?;
        let index = index.trim().parse().context("invalid item index")?;
        return Ok(ItemId::from_parts(category, index));
    }
    items
        .find_by_name(input)
        .map(|definition| definition.id)
        .ok_or_else(|| anyhow!("no item named '{}' in the catalog", input))
}
