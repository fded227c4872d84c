//! Repository for the `meal_orders` table.

use roomgate_core::meal::{CreateMealOrder, MealOrder};
use roomgate_core::types::RoomNumber;
use sqlx::PgPool;

use crate::models::meal::MealOrderRow;

/// Column list for `meal_orders` queries.
const COLUMNS: &str = "id, room, order_name, ordered_at";

/// Provides insert and listing for meal orders.
pub struct MealRepo;

impl MealRepo {
    /// Insert a new order, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMealOrder) -> Result<MealOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO meal_orders (room, order_name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MealOrderRow>(&query)
            .bind(input.room)
            .bind(input.order_or_default())
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// All orders, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MealOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meal_orders ORDER BY ordered_at DESC, id DESC");
        let rows = sqlx::query_as::<_, MealOrderRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Orders for one room, newest first.
    pub async fn list_by_room(
        pool: &PgPool,
        room: RoomNumber,
    ) -> Result<Vec<MealOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meal_orders WHERE room = $1 \
             ORDER BY ordered_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, MealOrderRow>(&query)
            .bind(room)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
