//! OpenAPI document for the contract endpoints.

use crate::contract::{ErrorMessage, ValidationErrorBody};
use crate::handlers::{counter, greeting};
use crate::schema::{Counter, Greeting, InsertGreeting};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        counter::get_counter,
        counter::increment_counter,
        counter::decrement_counter,
        counter::reset_counter,
        greeting::list_greetings,
        greeting::create_greeting,
        greeting::delete_greeting,
    ),
    components(schemas(Counter, Greeting, InsertGreeting, ErrorMessage, ValidationErrorBody)),
    tags(
        (name = "counter", description = "Persisted counter"),
        (name = "greetings", description = "User-submitted greetings")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ENDPOINTS;
    use serde_json::Value;

    fn document() -> Value {
        serde_json::to_value(ApiDoc::openapi()).unwrap()
    }

    #[test]
    fn documents_every_contract_endpoint_and_status() {
        let doc = document();
        for endpoint in ENDPOINTS {
            let method = endpoint.method.as_method().as_str().to_lowercase();
            let op = &doc["paths"][endpoint.openapi_path()][method];
            assert!(op.is_object(), "{} missing from document", endpoint.name);
            let statuses = std::iter::once(&endpoint.success).chain(endpoint.errors);
            for status in statuses {
                assert!(
                    op["responses"][status.as_str()].is_object(),
                    "{} does not document {}",
                    endpoint.name,
                    status
                );
            }
        }
    }

    #[test]
    fn documents_nothing_outside_the_contract() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();
        let operations: usize = paths
            .values()
            .map(|item| {
                ["get", "post", "put", "patch", "delete"]
                    .iter()
                    .filter(|m| item.get(**m).is_some())
                    .count()
            })
            .sum();
        assert_eq!(operations, ENDPOINTS.len());
    }
}
