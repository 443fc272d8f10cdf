//! In-process storage with the same semantics as the PostgreSQL adapter. Nothing survives a
//! restart; intended for tests and local experiments.

use super::{step, Storage};
use crate::error::AppError;
use crate::schema::{Counter, Greeting, InsertGreeting, DEFAULT_COUNTER_NAME};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    counters: Vec<Counter>,
    greetings: Vec<Greeting>,
    last_counter_id: i32,
    last_greeting_id: i32,
}

#[derive(Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::Internal("memory storage lock poisoned".into()))
    }

    fn set_counter_value(&self, id: i32, value: i32) -> Result<Counter, AppError> {
        let mut tables = self.lock()?;
        let row = tables
            .counters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        row.value = value;
        Ok(row.clone())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_counter(&self) -> Result<Counter, AppError> {
        let mut tables = self.lock()?;
        if let Some(row) = tables.counters.first() {
            return Ok(row.clone());
        }
        tables.last_counter_id += 1;
        let row = Counter {
            id: tables.last_counter_id,
            name: DEFAULT_COUNTER_NAME.to_string(),
            value: 0,
        };
        tables.counters.push(row.clone());
        Ok(row)
    }

    async fn increment_counter(&self) -> Result<Counter, AppError> {
        let current = self.get_counter().await?;
        self.set_counter_value(current.id, step(current.value, 1)?)
    }

    async fn decrement_counter(&self) -> Result<Counter, AppError> {
        let current = self.get_counter().await?;
        self.set_counter_value(current.id, step(current.value, -1)?)
    }

    async fn reset_counter(&self) -> Result<Counter, AppError> {
        let current = self.get_counter().await?;
        self.set_counter_value(current.id, 0)
    }

    async fn get_greetings(&self) -> Result<Vec<Greeting>, AppError> {
        Ok(self.lock()?.greetings.clone())
    }

    async fn create_greeting(&self, input: &InsertGreeting) -> Result<Greeting, AppError> {
        let mut tables = self.lock()?;
        tables.last_greeting_id += 1;
        let row = Greeting {
            id: tables.last_greeting_id,
            name: input.name.clone(),
            message: input.message.clone(),
        };
        tables.greetings.push(row.clone());
        Ok(row)
    }

    async fn delete_greeting(&self, id: i32) -> Result<bool, AppError> {
        let mut tables = self.lock()?;
        let before = tables.greetings.len();
        tables.greetings.retain(|g| g.id != id);
        Ok(tables.greetings.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counter_is_created_lazily_with_zero() {
        let store = MemoryStorage::new();
        let counter = store.get_counter().await.unwrap();
        assert_eq!(counter.name, "default");
        assert_eq!(counter.value, 0);
        assert_eq!(store.get_counter().await.unwrap().id, counter.id);
    }

    #[tokio::test]
    async fn counter_tracks_increments_minus_decrements() {
        let store = MemoryStorage::new();
        for _ in 0..5 {
            store.increment_counter().await.unwrap();
        }
        for _ in 0..7 {
            store.decrement_counter().await.unwrap();
        }
        assert_eq!(store.get_counter().await.unwrap().value, -2);
        assert_eq!(store.reset_counter().await.unwrap().value, 0);
    }

    #[tokio::test]
    async fn increment_at_max_is_an_error() {
        let store = MemoryStorage::new();
        let id = store.get_counter().await.unwrap().id;
        store.set_counter_value(id, i32::MAX).unwrap();
        assert!(matches!(
            store.increment_counter().await,
            Err(AppError::Internal(_))
        ));
        assert_eq!(store.get_counter().await.unwrap().value, i32::MAX);
    }

    #[tokio::test]
    async fn greetings_keep_insertion_order_and_fresh_ids() {
        let store = MemoryStorage::new();
        let a = store.create_greeting(&InsertGreeting::new("A", "B")).await.unwrap();
        let b = store.create_greeting(&InsertGreeting::new("C", "D")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.get_greetings().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = MemoryStorage::new();
        let a = store.create_greeting(&InsertGreeting::new("A", "B")).await.unwrap();
        let b = store.create_greeting(&InsertGreeting::new("C", "D")).await.unwrap();
        assert!(store.delete_greeting(a.id).await.unwrap());
        assert!(!store.delete_greeting(a.id).await.unwrap());
        assert_eq!(store.get_greetings().await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStorage::new();
        let a = store.create_greeting(&InsertGreeting::new("A", "B")).await.unwrap();
        store.delete_greeting(a.id).await.unwrap();
        let b = store.create_greeting(&InsertGreeting::new("A", "B")).await.unwrap();
        assert!(b.id > a.id);
    }
}
