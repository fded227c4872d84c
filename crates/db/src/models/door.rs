//! Door rows.

use roomgate_core::door::{DoorRecord, DoorState};
use roomgate_core::error::CoreError;
use roomgate_core::types::{DbId, RoomNumber, Timestamp};
use sqlx::FromRow;

/// A row from the `doors` table.
#[derive(Debug, Clone, FromRow)]
pub struct DoorRow {
    pub id: DbId,
    pub room: RoomNumber,
    pub state: String,
    pub created_at: Timestamp,
    pub last_updated: Timestamp,
}

/// A `doors` row returned from an update, with the state it replaced.
#[derive(Debug, Clone, FromRow)]
pub struct DoorUpdateRow {
    #[sqlx(flatten)]
    pub door: DoorRow,
    pub previous_state: String,
}

impl TryFrom<DoorRow> for DoorRecord {
    type Error = CoreError;

    fn try_from(row: DoorRow) -> Result<Self, Self::Error> {
        Ok(DoorRecord {
            room: row.room,
            state: row.state.parse::<DoorState>()?,
            created_at: row.created_at,
            last_updated: row.last_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row(state: &str) -> DoorRow {
        DoorRow {
            id: 1,
            room: 101,
            state: state.to_string(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn converts_stored_state() {
        let record = DoorRecord::try_from(row("requested")).unwrap();
        assert_eq!(record.room, 101);
        assert_eq!(record.state, DoorState::Requested);
    }

    #[test]
    fn rejects_unknown_stored_state() {
        assert!(DoorRecord::try_from(row("jammed")).is_err());
    }
}
