//! Handlers for meal orders.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use roomgate_core::door::validate_room;
use roomgate_core::meal::{self, CreateMealOrder};
use roomgate_core::types::RoomNumber;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /add_meal
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateMealOrder>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    meal::validate_create(&input)?;

    let order = state.meals.create(&input).await?;

    tracing::info!(order_id = order.id, room = order.room, order = %order.order, "Meal ordered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /add_meal
pub async fn list_orders(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let orders = state.meals.list().await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /add_meal/{room}
pub async fn list_room_orders(
    State(state): State<AppState>,
    room: Result<Path<RoomNumber>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(room) = room?;
    validate_room(room)?;
    let orders = state.meals.list_by_room(room).await?;
    Ok(Json(DataResponse { data: orders }))
}
