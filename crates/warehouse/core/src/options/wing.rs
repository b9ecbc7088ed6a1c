use std::fmt;

use super::tables::TablesOracle;

/// One of the two wing 5th option slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub enum WingOption {
    #[default]
    None,
    Effect(u8),
}

impl WingOption {
    /// Wire sentinel for an empty slot.
    pub const NONE_CODE: u8 = 254;
    /// Codes the dashboard knows about.
    pub const KNOWN_EFFECTS: core::ops::RangeInclusive<u8> = 1..=10;

    /// Both `254` and `0` mean "no option".
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 | Self::NONE_CODE => Self::None,
            code => Self::Effect(code),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::None => Self::NONE_CODE,
            Self::Effect(code) => code,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<u8> for WingOption {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<WingOption> for u8 {
    fn from(option: WingOption) -> Self {
        option.code()
    }
}

/// Rendered wing option slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WingDescription<'t> {
    None,
    Effect(&'t str),
    Unrecognized(u8),
}

impl WingDescription<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for WingDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Effect(text) => f.write_str(text),
            Self::Unrecognized(code) => write!(f, "Unrecognized wing option ({code})"),
        }
    }
}

pub fn describe_wing_option(option: WingOption, tables: &dyn TablesOracle) -> WingDescription<'_> {
    match option {
        WingOption::None => WingDescription::None,
        WingOption::Effect(code) => tables
            .wing_effect(code)
            .map(WingDescription::Effect)
            .unwrap_or(WingDescription::Unrecognized(code)),
    }
}

/// Describes both wing slots in order.
///
/// The two slots are independent; the same effect may appear in both.
pub fn decode_wing_options(
    options: [WingOption; 2],
    tables: &dyn TablesOracle,
) -> [WingDescription<'_>; 2] {
    options.map(|option| describe_wing_option(option, tables))
}
