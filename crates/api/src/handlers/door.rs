//! Handlers for the door resource.
//!
//! Room terminals poll the probe, register once on first boot, then send
//! `requested` / `open` / `idle` transitions as the occupant uses the door.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roomgate_core::door::{DoorState, MSG_ROOM_CREATED};
use roomgate_core::types::RoomNumber;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::{DataResponse, MessageResponse, ResultResponse};
use crate::state::AppState;

/// Body of `POST /door`.
#[derive(Debug, Deserialize)]
pub struct RegisterDoor {
    pub room: RoomNumber,
    /// Initial state; defaults to `idle` when omitted.
    pub door: Option<String>,
}

/// Body of `PATCH /door/{room}`.
#[derive(Debug, Deserialize)]
pub struct TransitionDoor {
    pub door: String,
}

// ---------------------------------------------------------------------------
// GET /door
// ---------------------------------------------------------------------------

/// Availability probe: `accepted` iff no room holds the door.
pub async fn probe(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let result = state.doors.probe().await?;
    Ok(Json(ResultResponse { result }))
}

// ---------------------------------------------------------------------------
// POST /door
// ---------------------------------------------------------------------------

/// Register a room. Each room registers once; repeats answer 409.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDoor>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let initial = match input.door.as_deref() {
        Some(raw) => raw.parse::<DoorState>()?,
        None => DoorState::Idle,
    };

    state.doors.register(input.room, initial).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: MSG_ROOM_CREATED,
        }),
    ))
}

// ---------------------------------------------------------------------------
// PATCH /door/{room}
// ---------------------------------------------------------------------------

/// Apply a transition. Answers `accepted`, `rejected`, or `success`.
///
/// Any intrusion alert keeps running after the response is sent.
pub async fn transition(
    State(state): State<AppState>,
    room: Result<Path<RoomNumber>, PathRejection>,
    payload: Result<Json<TransitionDoor>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(room) = room?;
    let Json(input) = payload?;
    let requested = input.door.parse::<DoorState>()?;

    let transition = state.doors.transition(room, requested).await?;

    Ok(Json(MessageResponse {
        message: transition.outcome,
    }))
}

// ---------------------------------------------------------------------------
// GET /door/rooms, GET /door/{room}
// ---------------------------------------------------------------------------

/// List every registered room with its current door state.
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let doors = state.doors.list().await?;
    Ok(Json(DataResponse { data: doors }))
}

/// Fetch one room's door record.
pub async fn get_room(
    State(state): State<AppState>,
    room: Result<Path<RoomNumber>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(room) = room?;
    let door = state.doors.find(room).await?;
    Ok(Json(DataResponse { data: door }))
}
