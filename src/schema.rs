//! Persisted entities and their table DDL.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name given to the counter row created lazily on first read.
pub const DEFAULT_COUNTER_NAME: &str = "default";

/// `counters(id PK, name, value)`. Only the first row is ever read or written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Counter {
    pub id: i32,
    pub name: String,
    pub value: i32,
}

/// `greetings(id PK, name, message)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Greeting {
    pub id: i32,
    pub name: String,
    pub message: String,
}

/// Greeting payload without the generated id. Fields must be non-empty; see
/// [`crate::service::RequestValidator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InsertGreeting {
    pub name: String,
    pub message: String,
}

impl InsertGreeting {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub const COUNTERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS counters (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL DEFAULT 'default',
    value INTEGER NOT NULL DEFAULT 0
)
"#;

pub const GREETINGS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS greetings (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    message TEXT NOT NULL
)
"#;
