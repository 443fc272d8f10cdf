//! Greetboard: a persisted counter and a greetings list behind a typed HTTP/JSON contract.

pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod openapi;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use client::{ApiClient, ClientError};
pub use config::Settings;
pub use contract::{build_url, build_url_strict, Endpoint, ENDPOINTS};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use schema::{Counter, Greeting, InsertGreeting};
pub use service::seed_greetings;
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryStorage, PgStorage, Storage};
