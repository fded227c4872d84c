use axum::routing::get;
use axum::Router;

use crate::handlers::meal;
use crate::state::AppState;

/// Meal routes mounted at `/add_meal`.
///
/// ```text
/// GET    /          -> list_orders
/// POST   /          -> create_order
/// GET    /{room}    -> list_room_orders
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meal::list_orders).post(meal::create_order))
        .route("/{room}", get(meal::list_room_orders))
}
