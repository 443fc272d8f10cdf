//! Storage capability set. Handlers only ever see `dyn Storage`.
//!
//! Counter mutations are a read of the current row followed by a write keyed on its id, so
//! concurrent increments may lose updates.

mod memory;
mod postgres;

pub use memory::MemoryStorage;
pub use postgres::{ensure_database_exists, PgStorage};

use crate::error::AppError;
use crate::schema::{Counter, Greeting, InsertGreeting};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// First counter row, inserting `{name: "default", value: 0}` when the table is empty.
    async fn get_counter(&self) -> Result<Counter, AppError>;
    async fn increment_counter(&self) -> Result<Counter, AppError>;
    async fn decrement_counter(&self) -> Result<Counter, AppError>;
    async fn reset_counter(&self) -> Result<Counter, AppError>;

    /// All greetings in insertion order.
    async fn get_greetings(&self) -> Result<Vec<Greeting>, AppError>;
    async fn create_greeting(&self, input: &InsertGreeting) -> Result<Greeting, AppError>;
    /// Returns whether a row was removed.
    async fn delete_greeting(&self, id: i32) -> Result<bool, AppError>;

    /// Round-trip to the backing store. Used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn step(value: i32, delta: i32) -> Result<i32, AppError> {
    value
        .checked_add(delta)
        .ok_or_else(|| AppError::Internal(format!("counter overflow: {} + {}", value, delta)))
}
