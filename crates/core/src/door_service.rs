//! Door access-control protocol.
//!
//! [`DoorService`] applies transition requests against a [`DoorStore`] and
//! raises an intrusion alert through the [`Notifier`] when a room opens its
//! door without holding a granted request.
//!
//! Decision rules:
//!
//! | Requested   | Condition                         | Outcome    | Alert |
//! |-------------|-----------------------------------|------------|-------|
//! | `requested` | no room holds the lock            | `accepted` | no    |
//! | `requested` | any room holds the lock           | `rejected` | no    |
//! | `open`      | this room was `requested`         | `success`  | no    |
//! | `open`      | this room was not `requested`     | `success`  | yes   |
//! | `open`      | another room holds the lock       | `rejected` | yes   |
//! | `idle`      | always                            | `success`  | no    |

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::door::{
    unauthorized_open_message, validate_room, Availability, DoorRecord, DoorState,
    TransitionOutcome, MSG_ROOM_EXISTS,
};
use crate::error::{CoreError, CoreResult};
use crate::notify::{self, Notifier};
use crate::store::{Claim, DoorStore, Registration, StateWrite};
use crate::types::{DbId, RoomNumber};

/// Decision for one transition request.
#[derive(Debug)]
pub struct Transition {
    pub outcome: TransitionOutcome,
    /// The room's record after the write, or `None` when nothing was written.
    pub record: Option<DoorRecord>,
    /// Detached intrusion-alert task, if one was raised.
    pub alert: Option<JoinHandle<()>>,
}

/// Door state machine bound to a store and a notifier.
///
/// Cheaply cloneable; all fields are behind `Arc` or `Copy`.
#[derive(Clone)]
pub struct DoorService {
    store: Arc<dyn DoorStore>,
    notifier: Arc<dyn Notifier>,
    notify_timeout: Duration,
}

fn room_not_found(room: RoomNumber) -> CoreError {
    CoreError::NotFound {
        entity: "Room",
        id: DbId::from(room),
    }
}

impl DoorService {
    pub fn new(
        store: Arc<dyn DoorStore>,
        notifier: Arc<dyn Notifier>,
        notify_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            notify_timeout,
        }
    }

    /// Read-only availability probe: `accepted` iff no room holds the lock.
    pub async fn probe(&self) -> CoreResult<Availability> {
        let holding = self.store.any_holding().await?;
        Ok(Availability::from_holding(holding))
    }

    /// Register `room` with an initial state. Each room registers once.
    pub async fn register(&self, room: RoomNumber, state: DoorState) -> CoreResult<DoorRecord> {
        validate_room(room)?;

        match self.store.insert_if_absent(room, state).await? {
            Registration::Created(record) => {
                tracing::info!(room, state = %state, "Room registered");
                Ok(record)
            }
            Registration::RoomExists => {
                tracing::debug!(room, "Duplicate room registration refused");
                Err(CoreError::Conflict(MSG_ROOM_EXISTS.to_string()))
            }
            Registration::HeldByOther => Err(CoreError::Conflict(format!(
                "Room {room} cannot register as {state} while another room holds the door"
            ))),
        }
    }

    /// Apply a transition request for `room`.
    pub async fn transition(&self, room: RoomNumber, requested: DoorState) -> CoreResult<Transition> {
        validate_room(room)?;

        let transition = match requested {
            DoorState::Requested => self.request(room).await?,
            DoorState::Open => self.open(room).await?,
            DoorState::Idle => self.close(room).await?,
        };

        tracing::info!(
            room,
            requested = %requested,
            outcome = transition.outcome.as_str(),
            alerted = transition.alert.is_some(),
            "Door transition applied",
        );

        Ok(transition)
    }

    /// Look up one room's record.
    pub async fn find(&self, room: RoomNumber) -> CoreResult<DoorRecord> {
        validate_room(room)?;
        self.store
            .find_by_room(room)
            .await?
            .ok_or_else(|| room_not_found(room))
    }

    /// All door records ordered by room.
    pub async fn list(&self) -> CoreResult<Vec<DoorRecord>> {
        self.store.list().await
    }

    /// Whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }

    // -----------------------------------------------------------------------
    // Rules
    // -----------------------------------------------------------------------

    async fn request(&self, room: RoomNumber) -> CoreResult<Transition> {
        match self.store.try_claim(room).await? {
            Claim::Claimed(record) => Ok(Transition {
                outcome: TransitionOutcome::Accepted,
                record: Some(record),
                alert: None,
            }),
            Claim::Held => Ok(Transition {
                outcome: TransitionOutcome::Rejected,
                record: None,
                alert: None,
            }),
            Claim::UnknownRoom => Err(room_not_found(room)),
        }
    }

    async fn open(&self, room: RoomNumber) -> CoreResult<Transition> {
        match self.store.set_state(room, DoorState::Open).await? {
            StateWrite::Applied { previous, record } => {
                let alert = (previous != DoorState::Requested).then(|| self.raise_alert(room));
                Ok(Transition {
                    outcome: TransitionOutcome::Success,
                    record: Some(record),
                    alert,
                })
            }
            StateWrite::HeldByOther { previous } => {
                tracing::warn!(room, previous = %previous, "Open refused, another room holds the door");
                Ok(Transition {
                    outcome: TransitionOutcome::Rejected,
                    record: None,
                    alert: Some(self.raise_alert(room)),
                })
            }
            StateWrite::UnknownRoom => Err(room_not_found(room)),
        }
    }

    async fn close(&self, room: RoomNumber) -> CoreResult<Transition> {
        match self.store.set_state(room, DoorState::Idle).await? {
            StateWrite::Applied { record, .. } => Ok(Transition {
                outcome: TransitionOutcome::Success,
                record: Some(record),
                alert: None,
            }),
            StateWrite::HeldByOther { .. } => Err(CoreError::Internal(format!(
                "Store refused to close room {room}"
            ))),
            StateWrite::UnknownRoom => Err(room_not_found(room)),
        }
    }

    fn raise_alert(&self, room: RoomNumber) -> JoinHandle<()> {
        tracing::warn!(room, "Door opened without permission");
        notify::dispatch(
            Arc::clone(&self.notifier),
            unauthorized_open_message(room),
            self.notify_timeout,
        )
    }
}
