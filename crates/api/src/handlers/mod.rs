pub mod door;
pub mod evaluation;
pub mod meal;

/// GET / -- liveness text kept for the room terminals' connection check.
pub async fn root() -> &'static str {
    "Connect successfully!"
}
