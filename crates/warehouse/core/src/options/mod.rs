//! Option fields of an item record and their descriptions.
//!
//! Excellent options follow the progressive selection rule; wing options,
//! sockets and the mastery bonus are sentinel-coded fields. Wording is always
//! supplied through [`TablesOracle`].
mod class;
mod error;
mod excellent;
mod mastery;
mod socket;
mod tables;
mod wing;

pub use class::ItemClass;
pub use error::OptionError;
pub use excellent::{ExcellentFlags, ExcellentOptions, decode_options};
pub use mastery::{MasteryDescription, decode_mastery_bonus};
pub use socket::{SocketDescription, SocketSlot, decode_socket_options, describe_socket};
pub use tables::{
    Element, ExcellentTable, MasteryBonusEntry, MasteryBonusText, OptionTables, SocketEffect,
    SocketEffectEntry, TablesOracle,
};
pub use wing::{WingDescription, WingOption, decode_wing_options, describe_wing_option};

#[cfg(test)]
pub(crate) use tables::fixtures;
