//! External delivery channels for door alerts.

pub mod line;
pub mod log;
