use std::fmt;

use super::tables::TablesOracle;

/// Rendered mastery (ancient set) bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MasteryDescription<'t> {
    /// Not a set item, or a set item without a bonus tier.
    Inactive,
    Bonus {
        tier: u8,
        stats: &'t str,
        damage_decrease: &'t str,
    },
    Unrecognized(u8),
}

impl fmt::Display for MasteryDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => f.write_str("None"),
            Self::Bonus {
                stats,
                damage_decrease,
                ..
            } => write!(f, "{stats} / {damage_decrease}"),
            Self::Unrecognized(tier) => write!(f, "Unrecognized mastery bonus ({tier})"),
        }
    }
}

/// Looks up the mastery bonus; the tier only counts when the set flag is on.
pub fn decode_mastery_bonus(
    mastery_set: bool,
    tier: u8,
    tables: &dyn TablesOracle,
) -> MasteryDescription<'_> {
    if !mastery_set || tier == 0 {
        return MasteryDescription::Inactive;
    }
    match tables.mastery_bonus(tier) {
        Some(text) => MasteryDescription::Bonus {
            tier,
            stats: text.stats,
            damage_decrease: text.damage_decrease,
        },
        None => MasteryDescription::Unrecognized(tier),
    }
}
