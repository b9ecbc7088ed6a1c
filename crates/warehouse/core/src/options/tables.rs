//! Description tables for item options.
//!
//! All human-readable wording comes from outside the core. [`TablesOracle`] is the
//! read-only lookup the describers use; [`OptionTables`] is the plain-data
//! implementation that `warehouse-content` deserializes from `option_tables.ron`.

use std::collections::BTreeMap;

use super::class::ItemClass;

/// Read-only lookup of option descriptions.
pub trait TablesOracle: Send + Sync {
    /// Ordered descriptions of the six excellent sub-options of `class`.
    fn excellent_descriptions(&self, class: ItemClass) -> &[String];

    fn wing_effect(&self, code: u8) -> Option<&str>;

    fn socket_effect(&self, code: u16) -> Option<SocketEffect<'_>>;

    fn mastery_bonus(&self, tier: u8) -> Option<MasteryBonusText<'_>>;
}

/// Element group of a socket seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Water,
    Ice,
    Wind,
    Lightning,
    Earth,
}

/// Borrowed view of one socket seed effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocketEffect<'a> {
    pub element: Element,
    pub text: &'a str,
}

/// Borrowed view of one mastery bonus tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasteryBonusText<'a> {
    pub stats: &'a str,
    pub damage_decrease: &'a str,
}

/// Excellent descriptions per item class, in bit order (bit 0 first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcellentTable {
    pub weapon: Vec<String>,
    pub armor: Vec<String>,
    pub accessory: Vec<String>,
}

impl ExcellentTable {
    pub fn for_class(&self, class: ItemClass) -> &[String] {
        match class {
            ItemClass::Weapon => &self.weapon,
            ItemClass::Armor => &self.armor,
            ItemClass::Accessory => &self.accessory,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocketEffectEntry {
    pub element: Element,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasteryBonusEntry {
    pub stats: String,
    pub damage_decrease: String,
}

/// Plain-data description tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionTables {
    pub excellent: ExcellentTable,
    pub wing_effects: BTreeMap<u8, String>,
    pub socket_effects: BTreeMap<u16, SocketEffectEntry>,
    pub mastery_bonuses: BTreeMap<u8, MasteryBonusEntry>,
}

impl TablesOracle for OptionTables {
    fn excellent_descriptions(&self, class: ItemClass) -> &[String] {
        self.excellent.for_class(class)
    }

    fn wing_effect(&self, code: u8) -> Option<&str> {
        self.wing_effects.get(&code).map(String::as_str)
    }

    fn socket_effect(&self, code: u16) -> Option<SocketEffect<'_>> {
        self.socket_effects.get(&code).map(|entry| SocketEffect {
            element: entry.element,
            text: entry.text.as_str(),
        })
    }

    fn mastery_bonus(&self, tier: u8) -> Option<MasteryBonusText<'_>> {
        self.mastery_bonuses.get(&tier).map(|entry| MasteryBonusText {
            stats: entry.stats.as_str(),
            damage_decrease: entry.damage_decrease.as_str(),
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Small table with placeholder wording, enough to exercise every lookup.
    pub fn tables() -> OptionTables {
        let six = |prefix: &str| (1..=6).map(|i| format!("{prefix} {i}")).collect();
        OptionTables {
            excellent: ExcellentTable {
                weapon: six("weapon"),
                armor: six("armor"),
                accessory: six("accessory"),
            },
            wing_effects: (1..=10).map(|code| (code, format!("wing {code}"))).collect(),
            socket_effects: [
                (200, Element::Fire, "fire 200"),
                (210, Element::Water, "water 210"),
                (237, Element::Earth, "earth 237"),
            ]
            .into_iter()
            .map(|(code, element, text)| {
                (
                    code,
                    SocketEffectEntry {
                        element,
                        text: text.to_string(),
                    },
                )
            })
            .collect(),
            mastery_bonuses: (1..=3)
                .map(|tier| {
                    (
                        tier,
                        MasteryBonusEntry {
                            stats: format!("stats {tier}"),
                            damage_decrease: format!("decrease {tier}"),
                        },
                    )
                })
                .collect(),
        }
    }
}
