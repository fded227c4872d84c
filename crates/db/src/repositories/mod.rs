//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod door_repo;
pub mod evaluation_repo;
pub mod meal_repo;

pub use door_repo::DoorRepo;
pub use evaluation_repo::EvaluationRepo;
pub use meal_repo::MealRepo;
