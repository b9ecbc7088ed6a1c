//! Oracle access errors.

use crate::error::{ErrorContext, ErrorSeverity, WarehouseError};
use crate::types::ItemId;

/// Errors that occur when accessing oracle data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// TablesOracle is not available in the environment.
    #[error("TablesOracle not available")]
    TablesNotAvailable,

    /// Item definition was not found in the catalog.
    #[error("item {0} not found in catalog")]
    ItemNotFound(ItemId),
}

impl WarehouseError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Missing oracles are fatal - nothing can be resolved without them
            Self::ItemsNotAvailable | Self::TablesNotAvailable => ErrorSeverity::Fatal,
            Self::ItemNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::ItemNotFound(id) => Some(ErrorContext::new().with_item(*id)),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            Self::TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            Self::ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
