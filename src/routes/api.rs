//! Contract endpoints. Method and path for every route come from [`crate::contract`].

use crate::contract::{counter, greetings, Endpoint};
use crate::handlers::{
    create_greeting, decrement_counter, delete_greeting, get_counter, increment_counter,
    list_greetings, reset_counter,
};
use crate::openapi::{ApiDoc, OPENAPI_PATH};
use crate::state::AppState;
use axum::{
    handler::Handler,
    routing::{get, on},
    Json, Router,
};
use utoipa::OpenApi;

fn mount<H, T>(router: Router<AppState>, endpoint: Endpoint, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    router.route(endpoint.path, on(endpoint.method.filter(), handler))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_routes(state: AppState) -> Router {
    let router = Router::new();
    let router = mount(router, counter::GET, get_counter);
    let router = mount(router, counter::INCREMENT, increment_counter);
    let router = mount(router, counter::DECREMENT, decrement_counter);
    let router = mount(router, counter::RESET, reset_counter);
    let router = mount(router, greetings::LIST, list_greetings);
    let router = mount(router, greetings::CREATE, create_greeting);
    let router = mount(router, greetings::DELETE, delete_greeting);
    router.route(OPENAPI_PATH, get(openapi)).with_state(state)
}
