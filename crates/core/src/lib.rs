//! Domain layer for the roomgate backend.
//!
//! Holds the door access-control state machine and everything it needs that
//! is independent of HTTP or PostgreSQL:
//!
//! - [`door`]: door states, transition outcomes, room validation.
//! - [`door_service`]: the single-holder protocol over a [`store::DoorStore`].
//! - [`notify`]: the outbound [`notify::Notifier`] seam and its detached dispatcher.
//! - [`meal`] / [`evaluation`]: meal-order and health self-evaluation records.
//! - [`store`]: persistence traits implemented by `roomgate-db` and [`memory`].

pub mod door;
pub mod door_service;
pub mod error;
pub mod evaluation;
pub mod meal;
pub mod memory;
pub mod notify;
pub mod store;
pub mod types;
