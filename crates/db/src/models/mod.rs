pub mod door;
pub mod evaluation;
pub mod meal;
