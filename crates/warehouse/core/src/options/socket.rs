use std::fmt;

use super::tables::{Element, TablesOracle};

/// One socket slot of an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u16", into = "u16"))]
pub enum SocketSlot {
    /// The item has no socket in this slot.
    #[default]
    NoSlot,
    /// A socket exists but holds no seed.
    Empty,
    /// A socket filled with the seed effect `code`.
    Seed(u16),
}

impl SocketSlot {
    pub const NO_SLOT_CODE: u16 = 65535;
    pub const EMPTY_CODE: u16 = 65534;
    /// Range of seed codes observed in live data; not guaranteed exhaustive.
    pub const OBSERVED_SEEDS: core::ops::RangeInclusive<u16> = 200..=237;

    /// `0` is written by some legacy records for missing slots.
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 | Self::NO_SLOT_CODE => Self::NoSlot,
            Self::EMPTY_CODE => Self::Empty,
            code => Self::Seed(code),
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::NoSlot => Self::NO_SLOT_CODE,
            Self::Empty => Self::EMPTY_CODE,
            Self::Seed(code) => code,
        }
    }

    pub const fn exists(self) -> bool {
        !matches!(self, Self::NoSlot)
    }
}

impl From<u16> for SocketSlot {
    fn from(code: u16) -> Self {
        Self::from_code(code)
    }
}

impl From<SocketSlot> for u16 {
    fn from(slot: SocketSlot) -> Self {
        slot.code()
    }
}

/// Rendered socket slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocketDescription<'t> {
    NoSlot,
    Empty,
    Seed { element: Element, text: &'t str },
    UnknownEffect(u16),
}

impl fmt::Display for SocketDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlot => f.write_str("No Socket"),
            Self::Empty => f.write_str("Empty Socket"),
            Self::Seed { element, text } => write!(f, "({element}) {text}"),
            Self::UnknownEffect(code) => write!(f, "Unknown socket effect ({code})"),
        }
    }
}

pub fn describe_socket(slot: SocketSlot, tables: &dyn TablesOracle) -> SocketDescription<'_> {
    match slot {
        SocketSlot::NoSlot => SocketDescription::NoSlot,
        SocketSlot::Empty => SocketDescription::Empty,
        SocketSlot::Seed(code) => tables
            .socket_effect(code)
            .map(|effect| SocketDescription::Seed {
                element: effect.element,
                text: effect.text,
            })
            .unwrap_or(SocketDescription::UnknownEffect(code)),
    }
}

/// Describes all five socket slots in order; unknown seeds are never dropped.
pub fn decode_socket_options(
    sockets: [SocketSlot; 5],
    tables: &dyn TablesOracle,
) -> [SocketDescription<'_>; 5] {
    sockets.map(|slot| describe_socket(slot, tables))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::tables::fixtures;

    #[test]
    fn sentinels_round_trip_through_codes() {
        for slot in [SocketSlot::NoSlot, SocketSlot::Empty, SocketSlot::Seed(213)] {
            assert_eq!(SocketSlot::from_code(slot.code()), slot);
        }
        assert_eq!(SocketSlot::from_code(0), SocketSlot::NoSlot);
    }

    #[test]
    fn describes_every_slot_kind() {
        let tables = fixtures::tables();
        let decoded = decode_socket_options(
            [
                SocketSlot::Seed(200),
                SocketSlot::Empty,
                SocketSlot::Seed(215),
                SocketSlot::NoSlot,
                SocketSlot::Seed(237),
            ],
            &tables,
        );
        assert_eq!(
            decoded[0],
            SocketDescription::Seed {
                element: Element::Fire,
                text: "fire 200"
            }
        );
        assert_eq!(decoded[1], SocketDescription::Empty);
        assert_eq!(decoded[2], SocketDescription::UnknownEffect(215));
        assert_eq!(decoded[3], SocketDescription::NoSlot);
        assert_eq!(decoded[4].to_string(), "(Earth) earth 237");
    }
}
