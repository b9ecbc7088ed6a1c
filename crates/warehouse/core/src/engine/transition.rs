//! Session transitions and their three-phase dispatch.

use crate::env::{OracleError, WarehouseEnv};
use crate::grid::PlacementError;
use crate::types::{ItemRecord, ItemUid, SlotPosition};

use super::errors::{ExecuteError, SessionError, TransitionPhase, TransitionPhaseError};
use super::session::{PendingItem, PlacementMode, SessionState};
use super::Outcome;

/// Defines how one session action turns a snapshot into the next one.
///
/// Hooks receive read-only oracle access through `env` and must stay side
/// effect free; `apply` works on a private copy owned by the engine.
pub trait SessionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Implementations may assume `pre_validate` passed.
    fn apply(
        &self,
        state: &mut SessionState,
        env: &WarehouseEnv<'_>,
    ) -> Result<Outcome, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Picks up an item so it can be dropped with [`PlaceAt`].
///
/// Starting a new placement while one is pending replaces the pending item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeginPlacement {
    pub record: ItemRecord,
}

/// Drops the pending item without placing it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CancelPlacement;

/// Drops the pending item with its top-left corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceAt {
    pub x: i32,
    pub y: i32,
}

/// Takes a placed item out of the warehouse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveItem {
    pub uid: ItemUid,
}

impl SessionTransition for BeginPlacement {
    type Error = SessionError;

    fn pre_validate(
        &self,
        _state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), SessionError> {
        self.record.validate().map_err(SessionError::InvalidRecord)
    }

    fn apply(
        &self,
        state: &mut SessionState,
        env: &WarehouseEnv<'_>,
    ) -> Result<Outcome, SessionError> {
        let footprint = env
            .items()?
            .footprint(self.record.item_id)
            .ok_or(OracleError::ItemNotFound(self.record.item_id))?;
        state.pending = Some(PendingItem {
            record: self.record.clone(),
            footprint,
        });
        state.mode = PlacementMode::Placing;
        Ok(Outcome::PlacementStarted { footprint })
    }

    fn post_validate(
        &self,
        state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), SessionError> {
        require_placing(state)
    }
}

impl SessionTransition for CancelPlacement {
    type Error = SessionError;

    fn pre_validate(
        &self,
        state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), SessionError> {
        require_placing(state)
    }

    fn apply(
        &self,
        state: &mut SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<Outcome, SessionError> {
        state.pending = None;
        state.mode = PlacementMode::Idle;
        Ok(Outcome::PlacementCancelled)
    }
}

impl SessionTransition for PlaceAt {
    type Error = SessionError;

    fn pre_validate(
        &self,
        state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), SessionError> {
        require_placing(state)?;
        let pending = state.pending.as_ref().ok_or(SessionError::NotPlacing)?;
        state.warehouse.grid().check(self.x, self.y, pending.footprint)?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<Outcome, SessionError> {
        let pending = state.pending.take().ok_or(SessionError::NotPlacing)?;
        let (warehouse, uid) = state
            .warehouse
            .place(self.x, self.y, pending.record, pending.footprint)?;
        let position = warehouse
            .get(uid)
            .map(|item| item.record.position)
            .unwrap_or(SlotPosition::ORIGIN);
        state.warehouse = warehouse;
        state.mode = PlacementMode::Idle;
        Ok(Outcome::Placed { uid, position })
    }

    fn post_validate(
        &self,
        state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), SessionError> {
        require_consistent(state)
    }
}

impl SessionTransition for RemoveItem {
    type Error = SessionError;

    fn pre_validate(
        &self,
        state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), SessionError> {
        state
            .warehouse
            .get(self.uid)
            .map(|_| ())
            .ok_or(PlacementError::UnknownItem(self.uid).into())
    }

    fn apply(
        &self,
        state: &mut SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<Outcome, SessionError> {
        let record = state
            .warehouse
            .get(self.uid)
            .map(|item| item.record.clone())
            .ok_or(PlacementError::UnknownItem(self.uid))?;
        state.warehouse = state.warehouse.remove(self.uid)?;
        Ok(Outcome::Removed {
            uid: self.uid,
            record,
        })
    }

    fn post_validate(
        &self,
        state: &SessionState,
        _env: &WarehouseEnv<'_>,
    ) -> Result<(), SessionError> {
        if state.warehouse.grid().cells_of(self.uid) != 0 {
            return Err(SessionError::GridDesync);
        }
        require_consistent(state)
    }
}

fn require_placing(state: &SessionState) -> Result<(), SessionError> {
    if state.is_placing() && state.pending.is_some() {
        Ok(())
    } else {
        Err(SessionError::NotPlacing)
    }
}

fn require_consistent(state: &SessionState) -> Result<(), SessionError> {
    if state.mode_is_consistent() && state.warehouse.grid_is_consistent() {
        Ok(())
    } else {
        Err(SessionError::GridDesync)
    }
}

/// Runs a transition through pre_validate, apply and post_validate.
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut SessionState,
    env: &WarehouseEnv<'_>,
) -> Result<Outcome, TransitionPhaseError<T::Error>>
where
    T: SessionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

/// Routes an action to its transition.
pub(super) fn execute_transition(
    action: &super::SessionAction,
    state: &mut SessionState,
    env: &WarehouseEnv<'_>,
) -> Result<Outcome, ExecuteError> {
    use super::SessionAction;

    match action {
        SessionAction::BeginPlacement(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::BeginPlacement)
        }
        SessionAction::CancelPlacement(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::CancelPlacement)
        }
        SessionAction::PlaceAt(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::PlaceAt)
        }
        SessionAction::Remove(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Remove)
        }
    }
}
