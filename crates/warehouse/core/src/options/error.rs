use crate::error::{ErrorSeverity, WarehouseError};

use super::class::ItemClass;

/// Errors raised while interpreting option fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionError {
    /// Mask whose set bits are not a contiguous low-order run.
    #[error("excellent mask {0:#08b} is unrecognized (expected one of 0, 1, 3, 7, 15, 31, 63)")]
    UnrecognizedMask(u8),

    /// Sub-option index outside `0..6`.
    #[error("excellent sub-option index {0} is out of range")]
    IndexOutOfRange(u8),

    /// The description table has fewer entries than the mask enables.
    #[error("no {class} description for excellent sub-option {index}")]
    MissingDescription { class: ItemClass, index: u8 },
}

impl WarehouseError for OptionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnrecognizedMask(_) | Self::IndexOutOfRange(_) => ErrorSeverity::Validation,
            Self::MissingDescription { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnrecognizedMask(_) => "OPTION_UNRECOGNIZED_MASK",
            Self::IndexOutOfRange(_) => "OPTION_INDEX_OUT_OF_RANGE",
            Self::MissingDescription { .. } => "OPTION_MISSING_DESCRIPTION",
        }
    }
}
