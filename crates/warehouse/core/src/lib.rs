//! Codec and placement rules for MU Online warehouse storage.
//!
//! `warehouse-core` turns the persisted base64 warehouse blob into typed
//! [`ItemRecord`]s and back, interprets their option fields, and lays items on
//! the fixed 8×15 grid without overlap. Everything here is pure: no I/O, no
//! logging, no shared mutable state. Reference data (item catalog, option
//! wording) arrives through the oracle traits in [`env`] and [`options`];
//! `warehouse-content` provides file-backed implementations.
pub mod codec;
pub mod config;
pub mod describe;
pub mod engine;
pub mod env;
pub mod error;
pub mod grid;
pub mod options;
pub mod state;
pub mod types;

pub use codec::{
    BlobError, DecodeReport, DroppedRecord, EncodingError, ItemRecordCodec, RecordError,
    RecordSchema, WarehouseCodec, decode, encode,
};
pub use config::{LegacyLayout, MaskPolicy, WarehouseConfig};
pub use describe::{AdditionalOption, DescribeError, ItemSummary, describe_item};
pub use engine::{
    ExecuteError, Outcome, PendingItem, PlacementMode, SessionAction, SessionEngine,
    SessionError, SessionState, TransitionPhase, TransitionPhaseError,
};
pub use env::{Env, ItemDefinition, ItemOracle, OracleError, WarehouseEnv};
pub use error::{ErrorContext, ErrorSeverity, WarehouseError};
pub use grid::{PlacementError, WarehouseGrid};
pub use options::{
    ExcellentOptions, ItemClass, OptionError, OptionTables, SocketSlot, TablesOracle, WingOption,
    decode_mastery_bonus, decode_options, decode_socket_options, decode_wing_options,
};
pub use state::{LoadReport, OrphanedRecord, PlacedItem, Warehouse};
pub use types::{
    Footprint, ItemId, ItemRecord, ItemUid, SlotPosition, coords_to_position, position_to_coords,
};
