use axum::routing::get;
use axum::Router;

use crate::handlers::door;
use crate::state::AppState;

/// Door routes mounted at `/door`.
///
/// ```text
/// GET    /          -> probe
/// POST   /          -> register
/// GET    /rooms     -> list_rooms
/// GET    /{room}    -> get_room
/// PATCH  /{room}    -> transition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(door::probe).post(door::register))
        .route("/rooms", get(door::list_rooms))
        .route("/{room}", get(door::get_room).patch(door::transition))
}
