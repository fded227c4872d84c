use axum::routing::get;
use axum::Router;

use crate::handlers::evaluation;
use crate::state::AppState;

/// Evaluation routes mounted at `/evaluation`.
///
/// ```text
/// GET    /          -> list_evaluations
/// POST   /          -> create_evaluation
/// GET    /{room}    -> list_room_evaluations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(evaluation::list_evaluations).post(evaluation::create_evaluation),
        )
        .route("/{room}", get(evaluation::list_room_evaluations))
}
