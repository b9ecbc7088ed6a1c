/// Warehouse codec configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WarehouseConfig {
    /// Index order of the skill/luck flags inside legacy 40-field records.
    pub legacy_layout: LegacyLayout,

    /// How an excellent mask that breaks the progressive rule is handled when a
    /// record is decoded.
    pub mask_policy: MaskPolicy,
}

impl WarehouseConfig {
    // ===== grid geometry =====
    pub const GRID_WIDTH: u8 = 8;
    pub const GRID_HEIGHT: u8 = 15;
    pub const SLOT_COUNT: usize = Self::GRID_WIDTH as usize * Self::GRID_HEIGHT as usize;

    // ===== wire layout =====
    /// Number of fields the encoder writes per record.
    pub const FIELD_COUNT: usize = 43;
    /// Minimum number of fields a record needs to be decoded at all.
    pub const LEGACY_FIELD_COUNT: usize = 40;
    /// Delimiter between two records in the decoded blob text.
    pub const RECORD_DELIMITER: &'static str = "},{";
    /// Delimiter between two fields inside one record.
    pub const FIELD_DELIMITER: &'static str = ";";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_legacy_layout(mut self, legacy_layout: LegacyLayout) -> Self {
        self.legacy_layout = legacy_layout;
        self
    }

    pub fn with_mask_policy(mut self, mask_policy: MaskPolicy) -> Self {
        self.mask_policy = mask_policy;
        self
    }
}

/// Position of the skill and luck flags in legacy records.
///
/// Older dashboard revisions wrote luck before skill. The canonical 43-field
/// layout always uses skill at index 8 and luck at index 9.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LegacyLayout {
    #[default]
    SkillThenLuck,
    LuckThenSkill,
}

/// Handling of excellent masks outside `{0, 1, 3, 7, 15, 31, 63}` at decode time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MaskPolicy {
    /// Keep the contiguous low-order run of set bits (e.g. `0b101` becomes `0b001`).
    #[default]
    Normalize,
    /// Drop the whole record.
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_geometry_matches_slot_count() {
        assert_eq!(WarehouseConfig::SLOT_COUNT, 120);
    }

    #[test]
    fn layout_names_parse_case_insensitively() {
        assert_eq!(
            "Luck_Then_Skill".parse::<LegacyLayout>().unwrap(),
            LegacyLayout::LuckThenSkill
        );
        assert_eq!("reject".parse::<MaskPolicy>().unwrap(), MaskPolicy::Reject);
    }
}
