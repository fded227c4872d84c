//! Repository for the `evaluations` table.

use roomgate_core::evaluation::{CreateEvaluation, Evaluation};
use roomgate_core::types::RoomNumber;
use sqlx::PgPool;

use crate::models::evaluation::EvaluationRow;

/// Column list for `evaluations` queries.
const COLUMNS: &str = "id, room, symptom, temperature, evaluated_at";

/// Provides insert and listing for health self-evaluations.
pub struct EvaluationRepo;

impl EvaluationRepo {
    /// Insert a new evaluation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvaluation,
    ) -> Result<Evaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluations (room, symptom, temperature) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, EvaluationRow>(&query)
            .bind(input.room)
            .bind(input.symptom)
            .bind(input.temperature)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// All evaluations, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Evaluation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM evaluations ORDER BY evaluated_at DESC, id DESC");
        let rows = sqlx::query_as::<_, EvaluationRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Evaluations for one room, newest first.
    pub async fn list_by_room(
        pool: &PgPool,
        room: RoomNumber,
    ) -> Result<Vec<Evaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM evaluations WHERE room = $1 \
             ORDER BY evaluated_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, EvaluationRow>(&query)
            .bind(room)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
