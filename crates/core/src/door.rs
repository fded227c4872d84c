//! Door states, transition outcomes, and room validation.
//!
//! The building arbitrates a single physical lock across all rooms: at most
//! one room may be [`DoorState::Requested`] or [`DoorState::Open`] at a time.
//! That room is called the *holder*.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{RoomNumber, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest room number accepted at the boundary.
pub const MAX_ROOM_NUMBER: RoomNumber = 99_999;

/// Body of the `POST /door` response when a room is registered.
pub const MSG_ROOM_CREATED: &str = "The room is created";

/// Conflict message when a room registers a second time.
pub const MSG_ROOM_EXISTS: &str = "Room existed";

// ---------------------------------------------------------------------------
// DoorState
// ---------------------------------------------------------------------------

/// Persisted state of one room's door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    /// Closed with no pending request.
    Idle,
    /// The room asked to open and holds the shared lock.
    Requested,
    /// The door is currently open.
    Open,
}

impl DoorState {
    /// Canonical lowercase name, used for storage and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Requested => "requested",
            Self::Open => "open",
        }
    }

    /// Whether a room in this state occupies the shared lock.
    pub fn is_holding(self) -> bool {
        matches!(self, Self::Requested | Self::Open)
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoorState {
    type Err = CoreError;

    /// Parse a wire value. Accepts the canonical names plus the legacy
    /// device vocabulary (`request`, `close`, `closed`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" | "close" | "closed" => Ok(Self::Idle),
            "requested" | "request" => Ok(Self::Requested),
            "open" => Ok(Self::Open),
            other => Err(CoreError::Validation(format!(
                "Invalid door state '{other}'. Must be one of: idle, requested, open"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Decision returned for a transition request.
///
/// `Rejected` is a legitimate policy outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionOutcome {
    Accepted,
    Rejected,
    Success,
}

impl TransitionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Success => "success",
        }
    }
}

/// Result of the read-only availability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// No room holds the lock; a request would currently be accepted.
    Accepted,
    /// Some room holds the lock.
    Rejected,
}

impl Availability {
    pub fn from_holding(any_holding: bool) -> Self {
        if any_holding {
            Self::Rejected
        } else {
            Self::Accepted
        }
    }
}

// ---------------------------------------------------------------------------
// DoorRecord
// ---------------------------------------------------------------------------

/// One room's door record. Exactly one exists per registered room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoorRecord {
    pub room: RoomNumber,
    pub state: DoorState,
    pub created_at: Timestamp,
    pub last_updated: Timestamp,
}

// ---------------------------------------------------------------------------
// Validation and messages
// ---------------------------------------------------------------------------

/// Validate a room number received from a client.
pub fn validate_room(room: RoomNumber) -> Result<(), CoreError> {
    if room <= 0 {
        return Err(CoreError::Validation(format!(
            "Room number must be positive, got {room}"
        )));
    }
    if room > MAX_ROOM_NUMBER {
        return Err(CoreError::Validation(format!(
            "Room number must not exceed {MAX_ROOM_NUMBER}, got {room}"
        )));
    }
    Ok(())
}

/// Text sent to the notifier when a room opens without holding a request.
pub fn unauthorized_open_message(room: RoomNumber) -> String {
    format!("Room {room} open the door without permission!")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("idle".parse::<DoorState>().unwrap(), DoorState::Idle);
        assert_eq!(
            "requested".parse::<DoorState>().unwrap(),
            DoorState::Requested
        );
        assert_eq!("open".parse::<DoorState>().unwrap(), DoorState::Open);
    }

    #[test]
    fn parses_legacy_vocabulary() {
        assert_eq!("request".parse::<DoorState>().unwrap(), DoorState::Requested);
        assert_eq!("close".parse::<DoorState>().unwrap(), DoorState::Idle);
        assert_eq!(" Closed ".parse::<DoorState>().unwrap(), DoorState::Idle);
    }

    #[test]
    fn rejects_unknown_state() {
        let err = "ajar".parse::<DoorState>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("ajar"));
    }

    #[test]
    fn only_requested_and_open_hold_the_lock() {
        assert!(!DoorState::Idle.is_holding());
        assert!(DoorState::Requested.is_holding());
        assert!(DoorState::Open.is_holding());
    }

    #[test]
    fn outcomes_serialize_lowercase() {
        let json = serde_json::to_value(TransitionOutcome::Success).unwrap();
        assert_eq!(json, "success");
        let json = serde_json::to_value(Availability::Rejected).unwrap();
        assert_eq!(json, "rejected");
    }

    #[test]
    fn availability_follows_holding() {
        assert_eq!(Availability::from_holding(false), Availability::Accepted);
        assert_eq!(Availability::from_holding(true), Availability::Rejected);
    }

    #[test]
    fn room_bounds() {
        assert!(validate_room(101).is_ok());
        assert!(validate_room(0).is_err());
        assert!(validate_room(-5).is_err());
        assert!(validate_room(MAX_ROOM_NUMBER + 1).is_err());
    }

    #[test]
    fn unauthorized_message_text() {
        assert_eq!(
            unauthorized_open_message(303),
            "Room 303 open the door without permission!"
        );
    }
}
