pub mod door;
pub mod evaluation;
pub mod health;
pub mod meal;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Paths are mounted at the root because deployed room terminals call them
/// directly.
///
/// ```text
/// /                          connection check (plain text)
///
/// /door                      probe (GET), register (POST)
/// /door/rooms                list rooms (GET)
/// /door/{room}               get room (GET), transition (PATCH)
///
/// /add_meal                  list, create
/// /add_meal/{room}           list for room
///
/// /evaluation                list, create
/// /evaluation/{room}         list for room
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/door", door::router())
        .nest("/add_meal", meal::router())
        .nest("/evaluation", evaluation::router())
}
