//! The decoded form of one warehouse entry.

use crate::options::{ExcellentOptions, ItemClass, SocketSlot, WingOption};

use super::{ItemId, SlotPosition};

/// One packed inventory entry.
///
/// Sentinel-coded fields use typed variants: `254` is [`WingOption::None`],
/// `65535` is [`SocketSlot::NoSlot`] and `65534` is [`SocketSlot::Empty`].
/// Records are values; a change to an item is a remove followed by a place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRecord {
    pub position: SlotPosition,
    pub item_id: ItemId,
    /// Enchant level, `+0` to `+15`.
    pub level: u8,
    pub durability: u8,
    pub skill: bool,
    pub luck: bool,
    /// Additional option tier 0..=7; displayed as `tier * 4`.
    pub option_tier: u8,
    pub excellent: ExcellentOptions,
    /// Ancient/mastery set item, `9` on the wire when set.
    pub mastery_set: bool,
    /// Mastery bonus tier 0..=3; persisted as is, described only with `mastery_set`.
    pub mastery_bonus: u8,
    pub wing_options: [WingOption; 2],
    pub sockets: [SocketSlot; 5],
    /// Legacy identifiers; the encoder always writes zero.
    pub serial: u32,
    pub serial2: u32,
}

impl ItemRecord {
    pub const MAX_LEVEL: u8 = 15;
    pub const MAX_OPTION_TIER: u8 = 7;
    pub const MAX_MASTERY_BONUS: u8 = 3;
    pub const OPTION_TIER_STEP: u16 = 4;

    /// A plain record for `item_id` at `position` with every option empty.
    pub fn new(position: SlotPosition, item_id: ItemId) -> Self {
        Self {
            position,
            item_id,
            level: 0,
            durability: 0,
            skill: false,
            luck: false,
            option_tier: 0,
            excellent: ExcellentOptions::NONE,
            mastery_set: false,
            mastery_bonus: 0,
            wing_options: [WingOption::None; 2],
            sockets: [SocketSlot::NoSlot; 5],
            serial: 0,
            serial2: 0,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_durability(mut self, durability: u8) -> Self {
        self.durability = durability;
        self
    }

    pub fn with_skill(mut self, skill: bool) -> Self {
        self.skill = skill;
        self
    }

    pub fn with_luck(mut self, luck: bool) -> Self {
        self.luck = luck;
        self
    }

    pub fn with_option_tier(mut self, option_tier: u8) -> Self {
        self.option_tier = option_tier;
        self
    }

    pub fn with_excellent(mut self, excellent: ExcellentOptions) -> Self {
        self.excellent = excellent;
        self
    }

    /// Marks the record as a set item with the given bonus tier.
    pub fn with_mastery(mut self, mastery_bonus: u8) -> Self {
        self.mastery_set = true;
        self.mastery_bonus = mastery_bonus;
        self
    }

    pub fn with_wing_options(mut self, wing_options: [WingOption; 2]) -> Self {
        self.wing_options = wing_options;
        self
    }

    pub fn with_sockets(mut self, sockets: [SocketSlot; 5]) -> Self {
        self.sockets = sockets;
        self
    }

    pub fn with_position(mut self, position: SlotPosition) -> Self {
        self.position = position;
        self
    }

    pub fn class(&self) -> ItemClass {
        ItemClass::classify(self.item_id)
    }

    /// Displayed additional option value.
    pub fn additional_option_value(&self) -> u16 {
        u16::from(self.option_tier) * Self::OPTION_TIER_STEP
    }

    /// Checks every range constraint a record must satisfy to be encoded.
    pub fn validate(&self) -> Result<(), RecordViolation> {
        if !self.item_id.is_valid() {
            return Err(RecordViolation::InvalidItemId);
        }
        if self.level > Self::MAX_LEVEL {
            return Err(RecordViolation::OutOfRange {
                field: "level",
                value: u32::from(self.level),
            });
        }
        if self.option_tier > Self::MAX_OPTION_TIER {
            return Err(RecordViolation::OutOfRange {
                field: "option_tier",
                value: u32::from(self.option_tier),
            });
        }
        if self.mastery_bonus > Self::MAX_MASTERY_BONUS {
            return Err(RecordViolation::OutOfRange {
                field: "mastery_bonus",
                value: u32::from(self.mastery_bonus),
            });
        }
        // Payload codes must survive the wire: 0 and the sentinels read back as empty.
        if let Some(option) = self
            .wing_options
            .iter()
            .find(|option| WingOption::from_code(option.code()) != **option)
        {
            return Err(RecordViolation::SentinelCollision {
                field: "wing_option",
                value: u32::from(option.code()),
            });
        }
        if let Some(slot) = self
            .sockets
            .iter()
            .find(|slot| SocketSlot::from_code(slot.code()) != **slot)
        {
            return Err(RecordViolation::SentinelCollision {
                field: "socket",
                value: u32::from(slot.code()),
            });
        }
        Ok(())
    }
}

impl Default for ItemRecord {
    fn default() -> Self {
        Self::new(SlotPosition::ORIGIN, ItemId(0))
    }
}

/// A range constraint broken by an [`ItemRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordViolation {
    #[error("item id must be greater than zero")]
    InvalidItemId,

    #[error("{field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: u32 },

    /// A payload code that reads back as an empty or missing slot.
    #[error("{field} code {value} is reserved for empty slots")]
    SentinelCollision { field: &'static str, value: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> ItemRecord {
        ItemRecord::new(SlotPosition::ORIGIN, ItemId(5))
    }

    #[test]
    fn new_records_use_sentinel_defaults() {
        let record = sword();
        assert_eq!(record.wing_options, [WingOption::None; 2]);
        assert_eq!(record.sockets, [SocketSlot::NoSlot; 5]);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn validate_flags_out_of_range_fields() {
        assert_eq!(
            sword().with_level(16).validate(),
            Err(RecordViolation::OutOfRange {
                field: "level",
                value: 16
            })
        );
        assert!(sword().with_option_tier(8).validate().is_err());
        assert!(sword().with_mastery(4).validate().is_err());
        assert_eq!(
            ItemRecord::default().validate(),
            Err(RecordViolation::InvalidItemId)
        );
    }

    #[test]
    fn validate_rejects_payloads_that_read_back_as_sentinels() {
        for code in [0, WingOption::NONE_CODE] {
            let record = sword().with_wing_options([WingOption::None, WingOption::Effect(code)]);
            assert_eq!(
                record.validate(),
                Err(RecordViolation::SentinelCollision {
                    field: "wing_option",
                    value: u32::from(code),
                })
            );
        }
        for code in [0, SocketSlot::EMPTY_CODE, SocketSlot::NO_SLOT_CODE] {
            let mut sockets = [SocketSlot::NoSlot; 5];
            sockets[2] = SocketSlot::Seed(code);
            assert_eq!(
                sword().with_sockets(sockets).validate(),
                Err(RecordViolation::SentinelCollision {
                    field: "socket",
                    value: u32::from(code),
                })
            );
        }

        let mut sockets = [SocketSlot::Empty; 5];
        sockets[0] = SocketSlot::Seed(1);
        let record = sword()
            .with_wing_options([WingOption::Effect(1), WingOption::Effect(255)])
            .with_sockets(sockets);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn additional_option_is_four_per_tier() {
        assert_eq!(sword().with_option_tier(7).additional_option_value(), 28);
    }
}
