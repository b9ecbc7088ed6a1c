use crate::types::ItemId;

/// Item class selecting which excellent description table applies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemClass {
    /// Categories 0..=5 (swords, axes, maces, spears, bows, staffs).
    Weapon,
    /// Categories 6..=11 (shields, helms, armors, pants, gloves, boots).
    Armor,
    /// Everything else (wings, rings, pendants, misc).
    Accessory,
}

impl ItemClass {
    pub const WEAPON_CATEGORIES: core::ops::RangeInclusive<u32> = 0..=5;
    pub const ARMOR_CATEGORIES: core::ops::RangeInclusive<u32> = 6..=11;

    pub fn classify(item_id: ItemId) -> Self {
        let category = item_id.category();
        if Self::WEAPON_CATEGORIES.contains(&category) {
            Self::Weapon
        } else if Self::ARMOR_CATEGORIES.contains(&category) {
            Self::Armor
        } else {
            Self::Accessory
        }
    }

    /// Label of the additional option line ("Additional Dmg" for weapons).
    pub const fn additional_option_label(self) -> &'static str {
        match self {
            Self::Weapon => "Additional Dmg",
            Self::Armor | Self::Accessory => "Additional Def",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_category_boundaries() {
        assert_eq!(ItemClass::classify(ItemId(5)), ItemClass::Weapon);
        assert_eq!(ItemClass::classify(ItemId::from_parts(5, 511)), ItemClass::Weapon);
        assert_eq!(ItemClass::classify(ItemId::from_parts(6, 0)), ItemClass::Armor);
        assert_eq!(ItemClass::classify(ItemId::from_parts(11, 40)), ItemClass::Armor);
        assert_eq!(ItemClass::classify(ItemId::from_parts(12, 0)), ItemClass::Accessory);
        assert_eq!(ItemClass::classify(ItemId::from_parts(15, 3)), ItemClass::Accessory);
    }

    #[test]
    fn parses_from_snake_case() {
        assert_eq!("weapon".parse::<ItemClass>().unwrap(), ItemClass::Weapon);
        assert_eq!(ItemClass::Accessory.to_string(), "accessory");
    }
}
