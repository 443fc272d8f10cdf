//! Greeting handlers: list, create, delete.

use crate::contract::{ErrorMessage, ValidationErrorBody, GREETING_NOT_FOUND};
use crate::error::AppError;
use crate::schema::{Greeting, InsertGreeting};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

#[utoipa::path(
    get,
    path = "/api/greetings",
    tag = "greetings",
    responses((status = 200, description = "All greetings in insertion order", body = [Greeting]))
)]
pub async fn list_greetings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Greeting>>, AppError> {
    Ok(Json(state.store.get_greetings().await?))
}

#[utoipa::path(
    post,
    path = "/api/greetings",
    tag = "greetings",
    request_body = InsertGreeting,
    responses(
        (status = 201, description = "Greeting created", body = Greeting),
        (status = 400, description = "Input failed validation", body = ValidationErrorBody)
    )
)]
pub async fn create_greeting(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Greeting>), AppError> {
    let body = match body {
        Ok(Json(body)) => body,
        // Requests without a JSON content type are validated as an empty object.
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rej) => return Err(AppError::BadRequest(rej.body_text())),
    };
    let input = RequestValidator::greeting(&body)?;
    let greeting = state.store.create_greeting(&input).await?;
    tracing::info!(id = greeting.id, name = %greeting.name, "greeting created");
    Ok((StatusCode::CREATED, Json(greeting)))
}

#[utoipa::path(
    delete,
    path = "/api/greetings/{id}",
    tag = "greetings",
    params(("id" = i32, Path, description = "Greeting id")),
    responses(
        (status = 204, description = "Greeting deleted"),
        (status = 404, description = "No greeting with this id", body = ErrorMessage)
    )
)]
pub async fn delete_greeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    // An id that is not a number cannot match any row.
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(GREETING_NOT_FOUND.into()))?;
    if !state.store.delete_greeting(id).await? {
        return Err(AppError::NotFound(GREETING_NOT_FOUND.into()));
    }
    tracing::info!(id, "greeting deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Numeric path id. Integral float spellings such as `5.0` or `1e0` are accepted.
fn parse_id(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i32>() {
        return Some(id);
    }
    let n: f64 = raw.parse().ok()?;
    let in_range = n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX);
    (n.is_finite() && n.fract() == 0.0 && in_range).then(|| n as i32)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn integral_spellings_parse() {
        assert_eq!(parse_id("5"), Some(5));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("5.0"), Some(5));
        assert_eq!(parse_id("1e0"), Some(1));
        assert_eq!(parse_id("-3"), Some(-3));
    }

    #[test]
    fn fractional_and_non_numeric_ids_are_rejected() {
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("NaN"), None);
        assert_eq!(parse_id("inf"), None);
        assert_eq!(parse_id("1e12"), None);
    }
}
