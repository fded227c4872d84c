//! In-memory store implementations.
//!
//! Used when no `DATABASE_URL` is configured and throughout the test suites.
//! Each store keeps its records behind a single `tokio::sync::Mutex`, so
//! every trait method observes and mutates the table in one critical section.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::door::{DoorRecord, DoorState};
use crate::error::CoreResult;
use crate::evaluation::{CreateEvaluation, Evaluation};
use crate::meal::{CreateMealOrder, MealOrder};
use crate::store::{Claim, DoorStore, EvaluationStore, MealStore, Registration, StateWrite};
use crate::types::{DbId, RoomNumber};

// ---------------------------------------------------------------------------
// Doors
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InMemoryDoorStore {
    doors: Mutex<BTreeMap<RoomNumber, DoorRecord>>,
}

impl InMemoryDoorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn holder_other_than(
    doors: &BTreeMap<RoomNumber, DoorRecord>,
    room: RoomNumber,
) -> Option<RoomNumber> {
    doors
        .values()
        .find(|d| d.room != room && d.state.is_holding())
        .map(|d| d.room)
}

#[async_trait]
impl DoorStore for InMemoryDoorStore {
    async fn find_by_room(&self, room: RoomNumber) -> CoreResult<Option<DoorRecord>> {
        Ok(self.doors.lock().await.get(&room).cloned())
    }

    async fn any_holding(&self) -> CoreResult<bool> {
        Ok(self
            .doors
            .lock()
            .await
            .values()
            .any(|d| d.state.is_holding()))
    }

    async fn list(&self) -> CoreResult<Vec<DoorRecord>> {
        Ok(self.doors.lock().await.values().cloned().collect())
    }

    async fn insert_if_absent(
        &self,
        room: RoomNumber,
        state: DoorState,
    ) -> CoreResult<Registration> {
        let mut doors = self.doors.lock().await;
        if doors.contains_key(&room) {
            return Ok(Registration::RoomExists);
        }
        if state.is_holding() && holder_other_than(&doors, room).is_some() {
            return Ok(Registration::HeldByOther);
        }
        let now = Utc::now();
        let record = DoorRecord {
            room,
            state,
            created_at: now,
            last_updated: now,
        };
        doors.insert(room, record.clone());
        Ok(Registration::Created(record))
    }

    async fn try_claim(&self, room: RoomNumber) -> CoreResult<Claim> {
        let mut doors = self.doors.lock().await;
        if !doors.contains_key(&room) {
            return Ok(Claim::UnknownRoom);
        }
        if doors.values().any(|d| d.state.is_holding()) {
            return Ok(Claim::Held);
        }
        let Some(record) = doors.get_mut(&room) else {
            return Ok(Claim::UnknownRoom);
        };
        record.state = DoorState::Requested;
        record.last_updated = Utc::now();
        Ok(Claim::Claimed(record.clone()))
    }

    async fn set_state(&self, room: RoomNumber, state: DoorState) -> CoreResult<StateWrite> {
        let mut doors = self.doors.lock().await;
        let other_holder = holder_other_than(&doors, room);
        let Some(record) = doors.get_mut(&room) else {
            return Ok(StateWrite::UnknownRoom);
        };
        let previous = record.state;
        if state.is_holding() && other_holder.is_some() {
            return Ok(StateWrite::HeldByOther { previous });
        }
        record.state = state;
        record.last_updated = Utc::now();
        Ok(StateWrite::Applied {
            previous,
            record: record.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Meals
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InMemoryMealStore {
    orders: Mutex<Vec<MealOrder>>,
}

impl InMemoryMealStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealStore for InMemoryMealStore {
    async fn create(&self, input: &CreateMealOrder) -> CoreResult<MealOrder> {
        let mut orders = self.orders.lock().await;
        let order = MealOrder {
            id: orders.len() as DbId + 1,
            room: input.room,
            order: input.order_or_default().to_string(),
            ordered_at: Utc::now(),
        };
        orders.push(order.clone());
        Ok(order)
    }

    async fn list(&self) -> CoreResult<Vec<MealOrder>> {
        Ok(self.orders.lock().await.iter().rev().cloned().collect())
    }

    async fn list_by_room(&self, room: RoomNumber) -> CoreResult<Vec<MealOrder>> {
        Ok(self
            .orders
            .lock()
            .await
            .iter()
            .rev()
            .filter(|o| o.room == room)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Evaluations
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InMemoryEvaluationStore {
    evaluations: Mutex<Vec<Evaluation>>,
}

impl InMemoryEvaluationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EvaluationStore for InMemoryEvaluationStore {
    async fn create(&self, input: &CreateEvaluation) -> CoreResult<Evaluation> {
        let mut evaluations = self.evaluations.lock().await;
        let evaluation = Evaluation {
            id: evaluations.len() as DbId + 1,
            room: input.room,
            symptom: input.symptom,
            temperature: input.temperature,
            evaluated_at: Utc::now(),
        };
        evaluations.push(evaluation.clone());
        Ok(evaluation)
    }

    async fn list(&self) -> CoreResult<Vec<Evaluation>> {
        Ok(self.evaluations.lock().await.iter().rev().cloned().collect())
    }

    async fn list_by_room(&self, room: RoomNumber) -> CoreResult<Vec<Evaluation>> {
        Ok(self
            .evaluations
            .lock()
            .await
            .iter()
            .rev()
            .filter(|e| e.room == room)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn registration_is_insert_if_absent() {
        let store = InMemoryDoorStore::new();
        assert_matches!(
            store.insert_if_absent(101, DoorState::Idle).await.unwrap(),
            Registration::Created(_)
        );
        assert_matches!(
            store.insert_if_absent(101, DoorState::Open).await.unwrap(),
            Registration::RoomExists
        );
        let record = store.find_by_room(101).await.unwrap().unwrap();
        assert_eq!(record.state, DoorState::Idle);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn registering_a_second_holder_is_refused() {
        let store = InMemoryDoorStore::new();
        store.insert_if_absent(1, DoorState::Open).await.unwrap();
        assert_matches!(
            store.insert_if_absent(2, DoorState::Requested).await.unwrap(),
            Registration::HeldByOther
        );
        assert!(store.find_by_room(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn claim_fails_while_any_room_holds() {
        let store = InMemoryDoorStore::new();
        store.insert_if_absent(1, DoorState::Idle).await.unwrap();
        store.insert_if_absent(2, DoorState::Idle).await.unwrap();

        assert_matches!(store.try_claim(1).await.unwrap(), Claim::Claimed(r) if r.state == DoorState::Requested);
        assert_matches!(store.try_claim(2).await.unwrap(), Claim::Held);
        assert_matches!(store.try_claim(1).await.unwrap(), Claim::Held);
        assert_matches!(store.try_claim(9).await.unwrap(), Claim::UnknownRoom);
    }

    #[tokio::test]
    async fn set_state_reports_previous_state() {
        let store = InMemoryDoorStore::new();
        store.insert_if_absent(1, DoorState::Requested).await.unwrap();

        let write = store.set_state(1, DoorState::Open).await.unwrap();
        assert_matches!(
            write,
            StateWrite::Applied { previous: DoorState::Requested, record } if record.state == DoorState::Open
        );
    }

    #[tokio::test]
    async fn set_state_refuses_second_holder_but_allows_idle() {
        let store = InMemoryDoorStore::new();
        store.insert_if_absent(1, DoorState::Requested).await.unwrap();
        store.insert_if_absent(2, DoorState::Idle).await.unwrap();

        assert_matches!(
            store.set_state(2, DoorState::Open).await.unwrap(),
            StateWrite::HeldByOther { previous: DoorState::Idle }
        );
        assert_matches!(
            store.set_state(2, DoorState::Idle).await.unwrap(),
            StateWrite::Applied { .. }
        );
        assert_matches!(
            store.set_state(3, DoorState::Idle).await.unwrap(),
            StateWrite::UnknownRoom
        );
    }

    #[tokio::test]
    async fn meal_orders_list_newest_first_and_filter_by_room() {
        let store = InMemoryMealStore::new();
        for (room, order) in [(1, None), (2, Some("Halal")), (1, Some("Vegan"))] {
            store
                .create(&CreateMealOrder {
                    room,
                    order: order.map(String::from),
                })
                .await
                .unwrap();
        }

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].order, "Vegan");

        let room_one = store.list_by_room(1).await.unwrap();
        let orders: Vec<_> = room_one.iter().map(|o| o.order.as_str()).collect();
        assert_eq!(orders, ["Vegan", "Vegetarian"]);
    }

    #[tokio::test]
    async fn evaluations_filter_by_room() {
        let store = InMemoryEvaluationStore::new();
        store
            .create(&CreateEvaluation {
                room: 5,
                symptom: true,
                temperature: 38.1,
            })
            .await
            .unwrap();
        store
            .create(&CreateEvaluation {
                room: 6,
                symptom: false,
                temperature: 36.4,
            })
            .await
            .unwrap();

        let room_five = store.list_by_room(5).await.unwrap();
        assert_eq!(room_five.len(), 1);
        assert!(room_five[0].symptom);
        assert_eq!(store.list().await.unwrap()[0].room, 6);
    }
}
