//! Excellent option bit set with progressive selection.
//!
//! Sub-option `i` may only be enabled when every sub-option before it is
//! enabled, so the legal masks are exactly `0, 1, 3, 7, 15, 31, 63`.
//! [`ExcellentOptions`] stores the number of enabled sub-options, which makes
//! every other mask unrepresentable.

use bitflags::bitflags;

use super::class::ItemClass;
use super::error::OptionError;
use super::tables::TablesOracle;

bitflags! {
    /// Raw excellent bits as they appear on the wire.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ExcellentFlags: u8 {
        const OPTION_1 = 1 << 0;
        const OPTION_2 = 1 << 1;
        const OPTION_3 = 1 << 2;
        const OPTION_4 = 1 << 3;
        const OPTION_5 = 1 << 4;
        const OPTION_6 = 1 << 5;
    }
}

/// Progressive excellent option selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct ExcellentOptions {
    enabled: u8,
}

impl ExcellentOptions {
    pub const SUB_OPTIONS: u8 = 6;
    pub const NONE: Self = Self { enabled: 0 };
    pub const ALL: Self = Self {
        enabled: Self::SUB_OPTIONS,
    };
    pub const LEGAL_MASKS: [u8; 7] = [0, 1, 3, 7, 15, 31, 63];

    /// Options with the first `count` sub-options enabled.
    pub const fn from_count(count: u8) -> Option<Self> {
        if count <= Self::SUB_OPTIONS {
            Some(Self { enabled: count })
        } else {
            None
        }
    }

    /// Accepts only the seven legal masks.
    pub fn from_mask(mask: u8) -> Result<Self, OptionError> {
        if Self::is_legal_mask(mask) {
            Ok(Self {
                enabled: mask.count_ones() as u8,
            })
        } else {
            Err(OptionError::UnrecognizedMask(mask))
        }
    }

    /// Keeps the contiguous run of set bits starting at bit 0.
    pub fn normalize(mask: u8) -> Self {
        let run = (!mask).trailing_zeros() as u8;
        Self {
            enabled: run.min(Self::SUB_OPTIONS),
        }
    }

    pub const fn is_legal_mask(mask: u8) -> bool {
        mask <= ExcellentFlags::all().bits() && mask & mask.wrapping_add(1) == 0
    }

    #[inline]
    pub const fn count(self) -> u8 {
        self.enabled
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        ((1u16 << self.enabled) - 1) as u8
    }

    pub fn flags(self) -> ExcellentFlags {
        ExcellentFlags::from_bits_truncate(self.mask())
    }

    pub fn is_empty(self) -> bool {
        self.enabled == 0
    }

    pub fn is_enabled(self, index: u8) -> bool {
        index < self.enabled
    }

    /// Enables sub-option `index` together with every sub-option before it.
    pub fn enable(self, index: u8) -> Result<Self, OptionError> {
        check_index(index)?;
        Ok(Self {
            enabled: self.enabled.max(index + 1),
        })
    }

    /// Disables sub-option `index` together with every sub-option after it.
    pub fn disable(self, index: u8) -> Result<Self, OptionError> {
        check_index(index)?;
        Ok(Self {
            enabled: self.enabled.min(index),
        })
    }

    /// Flips sub-option `index` under the progressive rule.
    pub fn toggle(self, index: u8) -> Result<Self, OptionError> {
        if self.is_enabled(index) {
            self.disable(index)
        } else {
            self.enable(index)
        }
    }

    /// Ordered descriptions of the enabled sub-options.
    pub fn describe<'t>(
        self,
        class: ItemClass,
        tables: &'t dyn TablesOracle,
    ) -> Result<Vec<&'t str>, OptionError> {
        let table = tables.excellent_descriptions(class);
        (0..self.enabled)
            .map(|index| {
                table
                    .get(index as usize)
                    .map(String::as_str)
                    .ok_or(OptionError::MissingDescription { class, index })
            })
            .collect()
    }
}

impl TryFrom<u8> for ExcellentOptions {
    type Error = OptionError;

    fn try_from(mask: u8) -> Result<Self, Self::Error> {
        Self::from_mask(mask)
    }
}

impl From<ExcellentOptions> for u8 {
    fn from(options: ExcellentOptions) -> Self {
        options.mask()
    }
}

fn check_index(index: u8) -> Result<(), OptionError> {
    if index < ExcellentOptions::SUB_OPTIONS {
        Ok(())
    } else {
        Err(OptionError::IndexOutOfRange(index))
    }
}

/// Describes a raw excellent mask.
///
/// Masks outside the legal set are reported as
/// [`OptionError::UnrecognizedMask`] instead of being read bit by bit.
pub fn decode_options<'t>(
    mask: u8,
    class: ItemClass,
    tables: &'t dyn TablesOracle,
) -> Result<Vec<&'t str>, OptionError> {
    ExcellentOptions::from_mask(mask)?.describe(class, tables)
}
