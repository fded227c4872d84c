//! [`PgStore`]: the core store traits backed by PostgreSQL.

use async_trait::async_trait;
use roomgate_core::door::{DoorRecord, DoorState};
use roomgate_core::error::{CoreError, CoreResult};
use roomgate_core::evaluation::{CreateEvaluation, Evaluation};
use roomgate_core::meal::{CreateMealOrder, MealOrder};
use roomgate_core::store::{
    Claim, DoorStore, EvaluationStore, MealStore, Registration, StateWrite,
};
use roomgate_core::types::RoomNumber;

use crate::repositories::{DoorRepo, EvaluationRepo, MealRepo};
use crate::DbPool;

/// Store adapter over a shared connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Store(err.to_string())
}

#[async_trait]
impl DoorStore for PgStore {
    async fn find_by_room(&self, room: RoomNumber) -> CoreResult<Option<DoorRecord>> {
        DoorRepo::find_by_room(&self.pool, room)
            .await
            .map_err(store_error)
    }

    async fn any_holding(&self) -> CoreResult<bool> {
        DoorRepo::any_holding(&self.pool).await.map_err(store_error)
    }

    async fn list(&self) -> CoreResult<Vec<DoorRecord>> {
        DoorRepo::list(&self.pool).await.map_err(store_error)
    }

    async fn insert_if_absent(
        &self,
        room: RoomNumber,
        state: DoorState,
    ) -> CoreResult<Registration> {
        DoorRepo::insert_if_absent(&self.pool, room, state)
            .await
            .map_err(store_error)
    }

    async fn try_claim(&self, room: RoomNumber) -> CoreResult<Claim> {
        DoorRepo::try_claim(&self.pool, room)
            .await
            .map_err(store_error)
    }

    async fn set_state(&self, room: RoomNumber, state: DoorState) -> CoreResult<StateWrite> {
        DoorRepo::set_state(&self.pool, room, state)
            .await
            .map_err(store_error)
    }

    async fn ping(&self) -> CoreResult<()> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}

#[async_trait]
impl MealStore for PgStore {
    async fn create(&self, input: &CreateMealOrder) -> CoreResult<MealOrder> {
        MealRepo::create(&self.pool, input).await.map_err(store_error)
    }

    async fn list(&self) -> CoreResult<Vec<MealOrder>> {
        MealRepo::list(&self.pool).await.map_err(store_error)
    }

    async fn list_by_room(&self, room: RoomNumber) -> CoreResult<Vec<MealOrder>> {
        MealRepo::list_by_room(&self.pool, room)
            .await
            .map_err(store_error)
    }
}

#[async_trait]
impl EvaluationStore for PgStore {
    async fn create(&self, input: &CreateEvaluation) -> CoreResult<Evaluation> {
        EvaluationRepo::create(&self.pool, input)
            .await
            .map_err(store_error)
    }

    async fn list(&self) -> CoreResult<Vec<Evaluation>> {
        EvaluationRepo::list(&self.pool).await.map_err(store_error)
    }

    async fn list_by_room(&self, room: RoomNumber) -> CoreResult<Vec<Evaluation>> {
        EvaluationRepo::list_by_room(&self.pool, room)
            .await
            .map_err(store_error)
    }
}
