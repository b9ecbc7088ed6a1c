//! Error types for the session transition pipeline.

use crate::env::OracleError;
use crate::error::{ErrorContext, ErrorSeverity, WarehouseError};
use crate::grid::PlacementError;
use crate::types::RecordViolation;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Reasons a session transition is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The action needs a pending item but the session is idle.
    #[error("no item is pending placement")]
    NotPlacing,

    #[error("pending item is invalid: {0}")]
    InvalidRecord(RecordViolation),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Grid cells no longer match the item list.
    #[error("grid desynchronized from the item list")]
    GridDesync,
}

impl WarehouseError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotPlacing => ErrorSeverity::Recoverable,
            Self::InvalidRecord(_) => ErrorSeverity::Validation,
            Self::Placement(error) => error.severity(),
            Self::Oracle(error) => error.severity(),
            Self::GridDesync => ErrorSeverity::Internal,
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            Self::Placement(error) => error.context(),
            Self::Oracle(error) => error.context(),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlacing => "SESSION_NOT_PLACING",
            Self::InvalidRecord(_) => "SESSION_INVALID_RECORD",
            Self::Placement(error) => error.error_code(),
            Self::Oracle(error) => error.error_code(),
            Self::GridDesync => "SESSION_GRID_DESYNC",
        }
    }
}

/// Errors surfaced while executing an action through the session engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("begin placement failed: {0}")]
    BeginPlacement(TransitionPhaseError<SessionError>),

    #[error("cancel placement failed: {0}")]
    CancelPlacement(TransitionPhaseError<SessionError>),

    #[error("place failed: {0}")]
    PlaceAt(TransitionPhaseError<SessionError>),

    #[error("remove failed: {0}")]
    Remove(TransitionPhaseError<SessionError>),
}

impl ExecuteError {
    /// The phase and error of the failed transition.
    pub fn phase_error(&self) -> &TransitionPhaseError<SessionError> {
        match self {
            Self::BeginPlacement(inner)
            | Self::CancelPlacement(inner)
            | Self::PlaceAt(inner)
            | Self::Remove(inner) => inner,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase_error().phase
    }

    pub fn session_error(&self) -> &SessionError {
        &self.phase_error().error
    }
}

impl WarehouseError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.session_error().severity()
    }

    fn context(&self) -> Option<ErrorContext> {
        self.session_error().context()
    }

    fn error_code(&self) -> &'static str {
        self.session_error().error_code()
    }
}
