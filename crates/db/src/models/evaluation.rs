use roomgate_core::evaluation::Evaluation;
use roomgate_core::types::{DbId, RoomNumber, Timestamp};
use sqlx::FromRow;

/// A row from the `evaluations` table.
#[derive(Debug, Clone, FromRow)]
pub struct EvaluationRow {
    pub id: DbId,
    pub room: RoomNumber,
    pub symptom: bool,
    pub temperature: f64,
    pub evaluated_at: Timestamp,
}

impl From<EvaluationRow> for Evaluation {
    fn from(row: EvaluationRow) -> Self {
        Evaluation {
            id: row.id,
            room: row.room,
            symptom: row.symptom,
            temperature: row.temperature,
            evaluated_at: row.evaluated_at,
        }
    }
}
