//! Repository for the `doors` table.
//!
//! The single-holder invariant is enforced by the partial unique index
//! `uq_doors_single_holder`. A write that would create a second holder fails
//! with a unique violation on that index, which this module reports as
//! [`Claim::Held`], [`Registration::HeldByOther`] or
//! [`StateWrite::HeldByOther`] rather than as an error.

use roomgate_core::door::{DoorRecord, DoorState};
use roomgate_core::store::{Claim, Registration, StateWrite};
use roomgate_core::types::RoomNumber;
use sqlx::PgPool;

use crate::models::door::{DoorRow, DoorUpdateRow};

/// Column list for `doors` queries.
const COLUMNS: &str = "id, room, state, created_at, last_updated";

/// Partial unique index allowing one `requested`/`open` row.
const SINGLE_HOLDER_INDEX: &str = "uq_doors_single_holder";

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Provides door lookups and state transitions.
pub struct DoorRepo;

impl DoorRepo {
    /// Find the door for `room`.
    pub async fn find_by_room(
        pool: &PgPool,
        room: RoomNumber,
    ) -> Result<Option<DoorRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doors WHERE room = $1");
        let row = sqlx::query_as::<_, DoorRow>(&query)
            .bind(room)
            .fetch_optional(pool)
            .await?;
        row.map(into_record).transpose()
    }

    /// Whether any room is `requested` or `open`.
    pub async fn any_holding(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM doors WHERE state IN ('requested', 'open'))",
        )
        .fetch_one(pool)
        .await
    }

    /// All doors ordered by room number.
    pub async fn list(pool: &PgPool) -> Result<Vec<DoorRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doors ORDER BY room");
        sqlx::query_as::<_, DoorRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(into_record)
            .collect()
    }

    /// Insert the door for `room` unless it already exists.
    pub async fn insert_if_absent(
        pool: &PgPool,
        room: RoomNumber,
        state: DoorState,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO doors (room, state) VALUES ($1, $2) \
             ON CONFLICT (room) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, DoorRow>(&query)
            .bind(room)
            .bind(state.as_str())
            .fetch_optional(pool)
            .await;

        match result {
            Ok(Some(row)) => Ok(Registration::Created(into_record(row)?)),
            Ok(None) => Ok(Registration::RoomExists),
            Err(e) if is_single_holder_violation(&e) => Ok(Registration::HeldByOther),
            Err(e) => Err(e),
        }
    }

    /// Move `room` to `requested` iff no door is `requested` or `open`.
    ///
    /// The `NOT EXISTS` guard handles the common case; concurrent claims that
    /// both pass the guard are serialized by the single-holder index.
    pub async fn try_claim(pool: &PgPool, room: RoomNumber) -> Result<Claim, sqlx::Error> {
        let query = format!(
            "UPDATE doors SET state = 'requested', last_updated = now() \
             WHERE room = $1 \
               AND NOT EXISTS (SELECT 1 FROM doors WHERE state IN ('requested', 'open')) \
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, DoorRow>(&query)
            .bind(room)
            .fetch_optional(pool)
            .await;

        match result {
            Ok(Some(row)) => return Ok(Claim::Claimed(into_record(row)?)),
            Ok(None) => {}
            Err(e) if is_single_holder_violation(&e) => {}
            Err(e) => return Err(e),
        }

        // Nothing was claimed: either the room is unknown or someone holds.
        match Self::find_by_room(pool, room).await? {
            Some(_) => Ok(Claim::Held),
            None => Ok(Claim::UnknownRoom),
        }
    }

    /// Write `state` for `room`, returning the state it replaced.
    ///
    /// The row is locked by the sub-select, so `previous` is the value the
    /// update actually overwrote.
    pub async fn set_state(
        pool: &PgPool,
        room: RoomNumber,
        state: DoorState,
    ) -> Result<StateWrite, sqlx::Error> {
        let result = sqlx::query_as::<_, DoorUpdateRow>(
            "UPDATE doors d SET state = $2, last_updated = now() \
             FROM (SELECT room, state FROM doors WHERE room = $1 FOR UPDATE) prev \
             WHERE d.room = prev.room \
             RETURNING d.id, d.room, d.state, d.created_at, d.last_updated, \
                       prev.state AS previous_state",
        )
        .bind(room)
        .bind(state.as_str())
        .fetch_optional(pool)
        .await;

        match result {
            Ok(Some(row)) => {
                let previous = parse_state(&row.previous_state)?;
                Ok(StateWrite::Applied {
                    previous,
                    record: into_record(row.door)?,
                })
            }
            Ok(None) => Ok(StateWrite::UnknownRoom),
            Err(e) if is_single_holder_violation(&e) => {
                match Self::find_by_room(pool, room).await? {
                    Some(current) => Ok(StateWrite::HeldByOther {
                        previous: current.state,
                    }),
                    None => Ok(StateWrite::UnknownRoom),
                }
            }
            Err(e) => Err(e),
        }
    }
}

fn is_single_holder_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(SINGLE_HOLDER_INDEX)
        }
        _ => false,
    }
}

fn parse_state(raw: &str) -> Result<DoorState, sqlx::Error> {
    raw.parse::<DoorState>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn into_record(row: DoorRow) -> Result<DoorRecord, sqlx::Error> {
    DoorRecord::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
