//! Codec errors.

use crate::error::{ErrorContext, ErrorSeverity, WarehouseError};
use crate::types::{ItemId, RecordViolation};

/// Reasons a single record chunk cannot be decoded.
///
/// The blob decoder never propagates these; it drops the chunk and lists it
/// in the [`DecodeReport`](super::DecodeReport).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record has {found} numeric fields, at least {required} required")]
    TooFewFields { found: usize, required: usize },

    #[error("item id {0} does not name an item")]
    InvalidItemId(i64),

    #[error("{field} value {value} is out of range")]
    FieldOutOfRange { field: &'static str, value: i64 },

    #[error("excellent mask {0} breaks progressive selection")]
    UnrecognizedMask(u8),
}

impl WarehouseError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::InvalidItemId(_) => {
                Some(ErrorContext::new().with_message("item id must be greater than zero"))
            }
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewFields { .. } => "RECORD_TOO_FEW_FIELDS",
            Self::InvalidItemId(_) => "RECORD_INVALID_ITEM_ID",
            Self::FieldOutOfRange { .. } => "RECORD_FIELD_OUT_OF_RANGE",
            Self::UnrecognizedMask(_) => "RECORD_UNRECOGNIZED_MASK",
        }
    }
}

/// Failure to encode a record sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("record {index} (item {item_id}) cannot be encoded: {violation}")]
    InvalidRecord {
        index: usize,
        item_id: ItemId,
        violation: RecordViolation,
    },
}

impl WarehouseError for EncodingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::InvalidRecord { item_id, .. } => Some(ErrorContext::new().with_item(*item_id)),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRecord { .. } => "ENCODING_INVALID_RECORD",
        }
    }
}

/// Failure of the outer base64 framing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BlobError {
    #[error("blob is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

impl WarehouseError for BlobError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBase64(_) => "BLOB_INVALID_BASE64",
        }
    }
}
