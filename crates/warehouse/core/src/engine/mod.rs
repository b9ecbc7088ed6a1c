//! Session state machine for interactive warehouse editing.
//!
//! A session is an immutable [`SessionState`] snapshot. [`SessionEngine`]
//! takes a snapshot and a [`SessionAction`], drives the action's transition
//! through its pre_validate, apply and post_validate phases on a private copy,
//! and returns the next snapshot. A failed action leaves the caller's snapshot
//! as it was.
mod errors;
mod session;
mod transition;

pub use errors::{ExecuteError, SessionError, TransitionPhase, TransitionPhaseError};
pub use session::{PendingItem, PlacementMode, SessionState};
pub use transition::{BeginPlacement, CancelPlacement, PlaceAt, RemoveItem, SessionTransition};

use crate::env::WarehouseEnv;
use crate::types::{Footprint, ItemRecord, ItemUid, SlotPosition};

/// Inputs accepted by the session engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    BeginPlacement(BeginPlacement),
    CancelPlacement(CancelPlacement),
    PlaceAt(PlaceAt),
    Remove(RemoveItem),
}

impl SessionAction {
    pub fn begin(record: ItemRecord) -> Self {
        Self::BeginPlacement(BeginPlacement { record })
    }

    pub fn cancel() -> Self {
        Self::CancelPlacement(CancelPlacement)
    }

    pub fn place_at(x: i32, y: i32) -> Self {
        Self::PlaceAt(PlaceAt { x, y })
    }

    pub fn remove(uid: ItemUid) -> Self {
        Self::Remove(RemoveItem { uid })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeginPlacement(_) => "begin_placement",
            Self::CancelPlacement(_) => "cancel_placement",
            Self::PlaceAt(_) => "place_at",
            Self::Remove(_) => "remove",
        }
    }
}

/// What a successful action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    PlacementStarted { footprint: Footprint },
    PlacementCancelled,
    Placed { uid: ItemUid, position: SlotPosition },
    Removed { uid: ItemUid, record: ItemRecord },
}

/// Stateless reducer over [`SessionState`] snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionEngine;

impl SessionEngine {
    /// Executes `action` against a copy of `state`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] naming the action and the phase that failed.
    pub fn execute(
        state: &SessionState,
        action: &SessionAction,
        env: &WarehouseEnv<'_>,
    ) -> Result<(SessionState, Outcome), ExecuteError> {
        let mut next = state.clone();
        let outcome = transition::execute_transition(action, &mut next, env)?;
        Ok((next, outcome))
    }

    /// Executes actions in order, stopping at the first failure.
    pub fn execute_all<'a>(
        state: &SessionState,
        actions: impl IntoIterator<Item = &'a SessionAction>,
        env: &WarehouseEnv<'_>,
    ) -> Result<(SessionState, Vec<Outcome>), ExecuteError> {
        let mut current = state.clone();
        let mut outcomes = Vec::new();
        for action in actions {
            let (next, outcome) = Self::execute(&current, action, env)?;
            current = next;
            outcomes.push(outcome);
        }
        Ok((current, outcomes))
    }
}
