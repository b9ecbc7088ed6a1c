//! Wire layout of one record and the legacy compatibility adapter.
//!
//! Canonical records carry 43 fields. Records written by older tools carry 40
//! to 42 fields and may swap skill/luck at indices 8/9; they are tagged
//! [`RecordSchema::Legacy`] and read through [`LegacyAdapter`].

use core::ops::Range;

use crate::config::{LegacyLayout, WarehouseConfig};

/// Field indices of the canonical layout.
pub mod field {
    use core::ops::Range;

    pub const POSITION: usize = 0;
    pub const ITEM_ID: usize = 1;
    pub const SERIAL: usize = 3;
    pub const SERIAL2: usize = 4;
    pub const LEVEL: usize = 5;
    pub const DURABILITY: usize = 6;
    pub const SKILL: usize = 8;
    pub const LUCK: usize = 9;
    pub const OPTION_TIER: usize = 10;
    pub const EXCELLENT: usize = 11;
    pub const MASTERY_SET: usize = 12;
    pub const SOCKETS: Range<usize> = 15..20;
    pub const MASTERY_BONUS: usize = 20;
    pub const RESERVED_255: Range<usize> = 30..36;
    pub const WING_OPTION_1: usize = 38;
    pub const WING_OPTION_2: usize = 39;
    pub const RESERVED_254: Range<usize> = 40..43;
}

/// Wire value of the mastery set flag when set.
pub const MASTERY_SET_CODE: u32 = 9;

/// Version tag of a decoded record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RecordSchema {
    /// 43 fields, as written by the encoder.
    Canonical,
    /// 40 to 42 fields.
    Legacy,
}

impl RecordSchema {
    /// Tags a record by its field count; `None` when too short to decode.
    pub const fn detect(field_count: usize) -> Option<Self> {
        if field_count >= WarehouseConfig::FIELD_COUNT {
            Some(Self::Canonical)
        } else if field_count >= WarehouseConfig::LEGACY_FIELD_COUNT {
            Some(Self::Legacy)
        } else {
            None
        }
    }
}

/// Resolves field indices that differ between schema revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyAdapter {
    layout: LegacyLayout,
}

impl LegacyAdapter {
    pub const fn new(layout: LegacyLayout) -> Self {
        Self { layout }
    }

    /// `(skill, luck)` indices for a record of `schema`.
    pub const fn skill_luck(&self, schema: RecordSchema) -> (usize, usize) {
        match (schema, self.layout) {
            (RecordSchema::Legacy, LegacyLayout::LuckThenSkill) => (field::LUCK, field::SKILL),
            _ => (field::SKILL, field::LUCK),
        }
    }
}

/// Fixed padding values of the canonical layout, as `(range, value)`.
pub(crate) const RESERVED_FILL: [(Range<usize>, u32); 2] = [
    (field::RESERVED_255, 255),
    (field::RESERVED_254, 254),
];
