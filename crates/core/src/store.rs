//! Persistence traits for door, meal, and evaluation records.
//!
//! Implemented by the PostgreSQL adapter in `roomgate-db` and by the
//! in-memory stores in [`crate::memory`]. Every method may fail with
//! [`CoreError::Store`](crate::error::CoreError::Store).
//!
//! Door stores must uphold the single-holder invariant themselves: the
//! check and the write in [`DoorStore::try_claim`] and
//! [`DoorStore::set_state`] are one atomic step.

use async_trait::async_trait;

use crate::door::{DoorRecord, DoorState};
use crate::error::CoreResult;
use crate::evaluation::{CreateEvaluation, Evaluation};
use crate::meal::{CreateMealOrder, MealOrder};
use crate::types::RoomNumber;

/// Result of an attempted room registration.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Created(DoorRecord),
    /// A record for this room already exists; nothing was written.
    RoomExists,
    /// The initial state would make a second holder.
    HeldByOther,
}

/// Result of an atomic claim of the shared lock.
#[derive(Debug, Clone, PartialEq)]
pub enum Claim {
    /// The room moved to `requested` and now holds the lock.
    Claimed(DoorRecord),
    /// Some room (possibly this one) already holds the lock.
    Held,
    UnknownRoom,
}

/// Result of an unconditional state write.
#[derive(Debug, Clone, PartialEq)]
pub enum StateWrite {
    /// The write happened. `previous` is the state observed under the same
    /// lock or row lock as the write.
    Applied {
        previous: DoorState,
        record: DoorRecord,
    },
    /// Another room holds the lock, so this room may not become a holder.
    HeldByOther { previous: DoorState },
    UnknownRoom,
}

#[async_trait]
pub trait DoorStore: Send + Sync {
    /// Point lookup by room.
    async fn find_by_room(&self, room: RoomNumber) -> CoreResult<Option<DoorRecord>>;

    /// True if any room is `requested` or `open`.
    async fn any_holding(&self) -> CoreResult<bool>;

    /// All door records ordered by room number.
    async fn list(&self) -> CoreResult<Vec<DoorRecord>>;

    /// Create the record for `room` unless one already exists.
    async fn insert_if_absent(
        &self,
        room: RoomNumber,
        state: DoorState,
    ) -> CoreResult<Registration>;

    /// Move `room` to `requested` iff no room holds the lock.
    async fn try_claim(&self, room: RoomNumber) -> CoreResult<Claim>;

    /// Write `state` for `room`, reporting the state it replaced.
    async fn set_state(&self, room: RoomNumber, state: DoorState) -> CoreResult<StateWrite>;

    /// Cheap reachability check used by `/health`.
    async fn ping(&self) -> CoreResult<()> {
        Ok(())
    }
}

#[async_trait]
pub trait MealStore: Send + Sync {
    async fn create(&self, input: &CreateMealOrder) -> CoreResult<MealOrder>;

    /// All orders, newest first.
    async fn list(&self) -> CoreResult<Vec<MealOrder>>;

    /// Orders for one room, newest first.
    async fn list_by_room(&self, room: RoomNumber) -> CoreResult<Vec<MealOrder>>;
}

#[async_trait]
pub trait EvaluationStore: Send + Sync {
    async fn create(&self, input: &CreateEvaluation) -> CoreResult<Evaluation>;

    /// All evaluations, newest first.
    async fn list(&self) -> CoreResult<Vec<Evaluation>>;

    /// Evaluations for one room, newest first.
    async fn list_by_room(&self, room: RoomNumber) -> CoreResult<Vec<Evaluation>>;
}
