//! Common error infrastructure for warehouse-core.
//!
//! This module provides shared types and traits used across all error types in the
//! crate. Domain-specific errors (e.g. `RecordError`, `PlacementError`) live next to
//! the code that raises them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error enum with specific variants
//! - **Rich Context**: Errors carry the slot and item they refer to where known
//! - **Severity Classification**: Errors are categorized for recovery strategies

use crate::types::{ItemId, SlotPosition};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with a different input (another cell)
/// - **Validation**: the input is malformed and must be fixed first
/// - **Internal**: a state inconsistency that indicates a bug
/// - **Fatal**: required collaborators are missing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error, e.g. the target cell is occupied.
    Recoverable,

    /// Validation error, e.g. a field is out of range.
    Validation,

    /// Internal error, e.g. the grid no longer matches the item list.
    Internal,

    /// Fatal error, e.g. no item catalog was provided.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Slot the error refers to (if applicable).
    pub position: Option<SlotPosition>,

    /// Item the error refers to (if applicable).
    pub item: Option<ItemId>,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: None,
            item: None,
            message: None,
        }
    }

    /// Attaches a slot position to this context (builder pattern).
    #[must_use]
    pub const fn with_position(mut self, position: SlotPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Attaches an item id to this context (builder pattern).
    #[must_use]
    pub const fn with_item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    /// Attaches a static message to this context (builder pattern).
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Common trait for all warehouse-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait WarehouseError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
