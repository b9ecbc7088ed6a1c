//! Wire codec for warehouse blobs.
//!
//! [`ItemRecordCodec`] maps one record's integer fields to an [`ItemRecord`]
//! and back; [`WarehouseCodec`] handles the base64 framing and record
//! delimiters of a whole blob.
//!
//! [`ItemRecord`]: crate::types::ItemRecord
mod blob;
mod error;
mod record;
mod schema;

pub use blob::{DecodeReport, DroppedRecord, WarehouseCodec, decode, encode};
pub use error::{BlobError, EncodingError, RecordError};
pub use record::{ItemRecordCodec, parse_fields};
pub use schema::{LegacyAdapter, MASTERY_SET_CODE, RecordSchema, field};
