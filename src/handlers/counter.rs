//! Counter handlers: read, increment, decrement, reset. All answer 200 with the row.

use crate::error::AppError;
use crate::schema::Counter;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/api/counter",
    tag = "counter",
    responses((status = 200, description = "Current counter", body = Counter))
)]
pub async fn get_counter(State(state): State<AppState>) -> Result<Json<Counter>, AppError> {
    Ok(Json(state.store.get_counter().await?))
}

#[utoipa::path(
    post,
    path = "/api/counter/increment",
    tag = "counter",
    responses((status = 200, description = "Counter after adding one", body = Counter))
)]
pub async fn increment_counter(State(state): State<AppState>) -> Result<Json<Counter>, AppError> {
    let counter = state.store.increment_counter().await?;
    tracing::debug!(value = counter.value, "counter incremented");
    Ok(Json(counter))
}

#[utoipa::path(
    post,
    path = "/api/counter/decrement",
    tag = "counter",
    responses((status = 200, description = "Counter after subtracting one", body = Counter))
)]
pub async fn decrement_counter(State(state): State<AppState>) -> Result<Json<Counter>, AppError> {
    let counter = state.store.decrement_counter().await?;
    tracing::debug!(value = counter.value, "counter decremented");
    Ok(Json(counter))
}

#[utoipa::path(
    post,
    path = "/api/counter/reset",
    tag = "counter",
    responses((status = 200, description = "Counter set back to zero", body = Counter))
)]
pub async fn reset_counter(State(state): State<AppState>) -> Result<Json<Counter>, AppError> {
    Ok(Json(state.store.reset_counter().await?))
}
