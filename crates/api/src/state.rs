use std::sync::Arc;

use roomgate_core::door_service::DoorService;
use roomgate_core::memory::{InMemoryDoorStore, InMemoryEvaluationStore, InMemoryMealStore};
use roomgate_core::notify::Notifier;
use roomgate_core::store::{EvaluationStore, MealStore};
use roomgate_db::PgStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Door access-control protocol over the configured store.
    pub doors: DoorService,
    /// Meal-order persistence.
    pub meals: Arc<dyn MealStore>,
    /// Health self-evaluation persistence.
    pub evaluations: Arc<dyn EvaluationStore>,
}

impl AppState {
    /// State backed by PostgreSQL.
    pub fn postgres(config: ServerConfig, store: PgStore, notifier: Arc<dyn Notifier>) -> Self {
        let store = Arc::new(store);
        let doors = DoorService::new(store.clone(), notifier, config.notify_timeout());
        Self {
            config: Arc::new(config),
            doors,
            meals: store.clone(),
            evaluations: store,
        }
    }

    /// State backed by process memory. Records are lost on restart.
    pub fn in_memory(config: ServerConfig, notifier: Arc<dyn Notifier>) -> Self {
        let doors = DoorService::new(
            Arc::new(InMemoryDoorStore::new()),
            notifier,
            config.notify_timeout(),
        );
        Self {
            config: Arc::new(config),
            doors,
            meals: Arc::new(InMemoryMealStore::new()),
            evaluations: Arc::new(InMemoryEvaluationStore::new()),
        }
    }
}
