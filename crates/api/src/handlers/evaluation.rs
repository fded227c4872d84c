//! Handlers for health self-evaluations.
//!
//! Every submission is stored. Submissions reporting a symptom or a fever are
//! additionally logged at warn level so staff watching the logs see them.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roomgate_core::door::validate_room;
use roomgate_core::evaluation::{self, CreateEvaluation};
use roomgate_core::types::RoomNumber;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /evaluation
pub async fn create_evaluation(
    State(state): State<AppState>,
    payload: Result<Json<CreateEvaluation>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    evaluation::validate_create(&input)?;

    let record = state.evaluations.create(&input).await?;

    if input.is_concerning() {
        tracing::warn!(
            evaluation_id = record.id,
            room = record.room,
            symptom = record.symptom,
            temperature = record.temperature,
            "Room reported symptoms or fever",
        );
    } else {
        tracing::info!(evaluation_id = record.id, room = record.room, "Evaluation recorded");
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /evaluation
pub async fn list_evaluations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let evaluations = state.evaluations.list().await?;
    Ok(Json(DataResponse { data: evaluations }))
}

/// GET /evaluation/{room}
pub async fn list_room_evaluations(
    State(state): State<AppState>,
    room: Result<Path<RoomNumber>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(room) = room?;
    validate_room(room)?;
    let evaluations = state.evaluations.list_by_room(room).await?;
    Ok(Json(DataResponse { data: evaluations }))
}
