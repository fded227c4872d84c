//! Shared response envelope types for API handlers.
//!
//! Door endpoints answer with the small `{ "result": ... }` and
//! `{ "message": ... }` bodies the room terminals already parse; listing
//! endpoints use the `{ "data": ... }` envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": T }` body used by door registration and transitions.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: T,
}

/// `{ "result": T }` body used by the availability probe.
#[derive(Debug, Serialize)]
pub struct ResultResponse<T: Serialize> {
    pub result: T,
}
