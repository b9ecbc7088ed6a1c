//! Human-readable item summaries, as shown on the warehouse hover card.

use std::fmt;

use crate::env::{OracleError, WarehouseEnv};
use crate::error::{ErrorContext, ErrorSeverity, WarehouseError};
use crate::options::{
    ItemClass, MasteryDescription, OptionError, SocketDescription, WingDescription,
    decode_mastery_bonus, decode_socket_options, decode_wing_options,
};
use crate::state::PlacedItem;
use crate::types::{Footprint, ItemId, ItemUid, SlotPosition};

/// Display data for one placed item. All text is owned so summaries can
/// outlive the oracles they were built from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSummary {
    pub uid: ItemUid,
    pub item_id: ItemId,
    pub name: String,
    pub class: ItemClass,
    pub position: SlotPosition,
    pub footprint: Footprint,
    pub level: u8,
    pub durability: u8,
    pub max_durability: u8,
    pub skill: bool,
    pub luck: bool,
    pub additional_option: Option<AdditionalOption>,
    pub excellent: Vec<String>,
    pub wing_options: Vec<String>,
    pub sockets: Vec<String>,
    pub mastery: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditionalOption {
    pub label: String,
    pub value: u16,
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{}", self.name, self.level)?;
        write!(f, "\n  Durability: {}/{}", self.durability, self.max_durability)?;
        if self.skill {
            f.write_str("\n  Skill")?;
        }
        if self.luck {
            f.write_str("\n  Luck")?;
        }
        if let Some(option) = &self.additional_option {
            write!(f, "\n  {}: +{}", option.label, option.value)?;
        }
        for line in &self.excellent {
            write!(f, "\n  Excellent: {line}")?;
        }
        for line in &self.wing_options {
            write!(f, "\n  Wing: {line}")?;
        }
        for line in &self.sockets {
            write!(f, "\n  Socket: {line}")?;
        }
        if let Some(mastery) = &self.mastery {
            write!(f, "\n  Mastery: {mastery}")?;
        }
        Ok(())
    }
}

/// Failure to build an [`ItemSummary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DescribeError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Option(#[from] OptionError),
}

impl WarehouseError for DescribeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::Option(error) => error.severity(),
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::Oracle(error) => error.context(),
            Self::Option(error) => error.context(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::Option(error) => error.error_code(),
        }
    }
}

/// Builds the hover-card summary of `item`.
///
/// The item catalog is optional: without it, or for items it does not know,
/// the name falls back to `Unknown item #<id>` and the maximum durability to
/// the current one.
///
/// # Errors
///
/// `OracleError::TablesNotAvailable` without option tables, or
/// `OptionError::MissingDescription` when the tables lack an excellent entry.
pub fn describe_item(
    item: &PlacedItem,
    env: &WarehouseEnv<'_>,
) -> Result<ItemSummary, DescribeError> {
    let tables = env.tables()?;
    let record = &item.record;
    let definition = env
        .items()
        .ok()
        .and_then(|items| items.definition(record.item_id));
    let class = record.class();

    let name = definition
        .as_ref()
        .map(|definition| definition.name.clone())
        .unwrap_or_else(|| format!("Unknown item #{}", record.item_id.0));
    let max_durability = definition
        .as_ref()
        .map(|definition| definition.max_durability)
        .filter(|max| *max > 0)
        .unwrap_or(record.durability);

    let additional_option = (record.option_tier > 0).then(|| AdditionalOption {
        label: class.additional_option_label().to_string(),
        value: record.additional_option_value(),
    });

    let excellent = record
        .excellent
        .describe(class, tables)?
        .into_iter()
        .map(str::to_string)
        .collect();

    let wing_options = decode_wing_options(record.wing_options, tables)
        .iter()
        .filter(|description| !matches!(description, WingDescription::None))
        .map(ToString::to_string)
        .collect();

    let sockets = decode_socket_options(record.sockets, tables)
        .iter()
        .filter(|description| !matches!(description, SocketDescription::NoSlot))
        .map(ToString::to_string)
        .collect();

    let mastery = match decode_mastery_bonus(record.mastery_set, record.mastery_bonus, tables) {
        MasteryDescription::Inactive => None,
        description => Some(description.to_string()),
    };

    Ok(ItemSummary {
        uid: item.uid,
        item_id: record.item_id,
        name,
        class,
        position: record.position,
        footprint: item.footprint,
        level: record.level,
        durability: record.durability,
        max_durability,
        skill: record.skill,
        luck: record.luck,
        additional_option,
        excellent,
        wing_options,
        sockets,
        mastery,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemOracle;
    use crate::env::fixtures::{self, WINGS_OF_STORM};
    use crate::options::fixtures::tables;
    use crate::options::{ExcellentOptions, SocketSlot, TablesOracle, WingOption};
    use crate::types::ItemRecord;

    fn placed(record: ItemRecord) -> PlacedItem {
        PlacedItem {
            uid: ItemUid(1),
            record,
            footprint: Footprint::UNIT,
        }
    }

    #[test]
    fn summarises_every_option_group() {
        let catalog = fixtures::catalog();
        let tables = tables();
        let env = WarehouseEnv::with_all(&catalog, &tables);
        let record = ItemRecord::new(SlotPosition::ORIGIN, WINGS_OF_STORM)
            .with_level(13)
            .with_durability(200)
            .with_luck(true)
            .with_option_tier(4)
            .with_excellent(ExcellentOptions::from_count(2).unwrap())
            .with_wing_options([WingOption::Effect(3), WingOption::None])
            .with_sockets([
                SocketSlot::Seed(200),
                SocketSlot::Empty,
                SocketSlot::Seed(230),
                SocketSlot::NoSlot,
                SocketSlot::NoSlot,
            ])
            .with_mastery(2);

        let summary = describe_item(&placed(record), &env).unwrap();
        assert_eq!(summary.name, "Wings of Storm");
        assert_eq!(summary.max_durability, 255);
        assert_eq!(summary.class, ItemClass::Accessory);
        assert_eq!(
            summary.additional_option,
            Some(AdditionalOption {
                label: "Additional Def".to_string(),
                value: 16
            })
        );
        assert_eq!(summary.excellent, vec!["accessory 1", "accessory 2"]);
        assert_eq!(summary.wing_options, vec!["wing 3"]);
        assert_eq!(
            summary.sockets,
            vec![
                "(Fire) fire 200",
                "Empty Socket",
                "Unknown socket effect (230)"
            ]
        );
        assert_eq!(summary.mastery.as_deref(), Some("stats 2 / decrease 2"));

        let card = summary.to_string();
        assert!(card.starts_with("Wings of Storm +13"));
        assert!(card.contains("Durability: 200/255"));
    }

    #[test]
    fn falls_back_without_catalog_entry() {
        let tables = tables();
        let env = WarehouseEnv::new(None, Some(&tables as &dyn TablesOracle));
        let record = ItemRecord::new(SlotPosition::ORIGIN, ItemId(777)).with_durability(12);
        let summary = describe_item(&placed(record), &env).unwrap();
        assert_eq!(summary.name, "Unknown item #777");
        assert_eq!(summary.max_durability, 12);
        assert!(summary.additional_option.is_none());
        assert!(summary.mastery.is_none());
        assert!(summary.sockets.is_empty());
    }

    #[test]
    fn requires_option_tables() {
        let catalog = fixtures::catalog();
        let env = WarehouseEnv::new(Some(&catalog as &dyn ItemOracle), None);
        let record = ItemRecord::new(SlotPosition::ORIGIN, WINGS_OF_STORM);
        assert_eq!(
            describe_item(&placed(record), &env),
            Err(DescribeError::Oracle(OracleError::TablesNotAvailable))
        );
    }
}
