//! Meal orders placed from a room.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, RoomNumber, Timestamp};

/// Order recorded when the client omits one.
pub const DEFAULT_ORDER: &str = "Vegetarian";

/// Maximum length of an order description.
const MAX_ORDER_LEN: usize = 200;

/// A stored meal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealOrder {
    pub id: DbId,
    pub room: RoomNumber,
    pub order: String,
    pub ordered_at: Timestamp,
}

/// DTO for placing a meal order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMealOrder {
    pub room: RoomNumber,
    pub order: Option<String>,
}

impl CreateMealOrder {
    /// The order text to persist, falling back to [`DEFAULT_ORDER`].
    pub fn order_or_default(&self) -> &str {
        match self.order.as_deref().map(str::trim) {
            Some(order) if !order.is_empty() => order,
            _ => DEFAULT_ORDER,
        }
    }
}

/// Validate a meal order before it reaches the store.
pub fn validate_create(input: &CreateMealOrder) -> Result<(), CoreError> {
    crate::door::validate_room(input.room)?;
    let order = input.order_or_default();
    if order.chars().count() > MAX_ORDER_LEN {
        return Err(CoreError::Validation(format!(
            "Order must not exceed {MAX_ORDER_LEN} characters"
        )));
    }
    Ok(())
}
