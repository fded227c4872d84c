use roomgate_core::meal::MealOrder;
use roomgate_core::types::{DbId, RoomNumber, Timestamp};
use sqlx::FromRow;

/// A row from the `meal_orders` table.
#[derive(Debug, Clone, FromRow)]
pub struct MealOrderRow {
    pub id: DbId,
    pub room: RoomNumber,
    pub order_name: String,
    pub ordered_at: Timestamp,
}

impl From<MealOrderRow> for MealOrder {
    fn from(row: MealOrderRow) -> Self {
        MealOrder {
            id: row.id,
            room: row.room,
            order: row.order_name,
            ordered_at: row.ordered_at,
        }
    }
}
