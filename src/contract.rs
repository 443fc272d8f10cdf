//! HTTP contract shared by the router and the typed client.
//!
//! Each operation is declared once as an [`Endpoint`]: method, path template and the status
//! codes it may answer with. Path templates use `:name` segments, the same syntax the axum
//! router matches on, so the server mounts handlers straight from this table.

use axum::http::{Method, StatusCode};
use axum::routing::MethodFilter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use utoipa::ToSchema;

pub const GREETING_NOT_FOUND: &str = "Greeting not found";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContractError {
    #[error("missing path parameter: {0}")]
    MissingParam(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_method(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    pub fn filter(self) -> MethodFilter {
        match self {
            HttpMethod::Get => MethodFilter::GET,
            HttpMethod::Post => MethodFilter::POST,
            HttpMethod::Delete => MethodFilter::DELETE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub success: StatusCode,
    pub errors: &'static [StatusCode],
}

impl Endpoint {
    /// Path with `:name` segments rendered as `{name}`.
    pub fn openapi_path(&self) -> String {
        self.path
            .split('/')
            .map(|seg| match param_name(seg) {
                Some(name) => format!("{{{}}}", name),
                None => seg.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

pub mod counter {
    use super::{Endpoint, HttpMethod, StatusCode};

    pub const GET: Endpoint = Endpoint {
        name: "counter.get",
        method: HttpMethod::Get,
        path: "/api/counter",
        success: StatusCode::OK,
        errors: &[],
    };

    pub const INCREMENT: Endpoint = Endpoint {
        name: "counter.increment",
        method: HttpMethod::Post,
        path: "/api/counter/increment",
        success: StatusCode::OK,
        errors: &[],
    };

    pub const DECREMENT: Endpoint = Endpoint {
        name: "counter.decrement",
        method: HttpMethod::Post,
        path: "/api/counter/decrement",
        success: StatusCode::OK,
        errors: &[],
    };

    pub const RESET: Endpoint = Endpoint {
        name: "counter.reset",
        method: HttpMethod::Post,
        path: "/api/counter/reset",
        success: StatusCode::OK,
        errors: &[],
    };
}

pub mod greetings {
    use super::{Endpoint, HttpMethod, StatusCode};

    pub const LIST: Endpoint = Endpoint {
        name: "greetings.list",
        method: HttpMethod::Get,
        path: "/api/greetings",
        success: StatusCode::OK,
        errors: &[],
    };

    pub const CREATE: Endpoint = Endpoint {
        name: "greetings.create",
        method: HttpMethod::Post,
        path: "/api/greetings",
        success: StatusCode::CREATED,
        errors: &[StatusCode::BAD_REQUEST],
    };

    pub const DELETE: Endpoint = Endpoint {
        name: "greetings.delete",
        method: HttpMethod::Delete,
        path: "/api/greetings/:id",
        success: StatusCode::NO_CONTENT,
        errors: &[StatusCode::NOT_FOUND],
    };
}

pub const ENDPOINTS: &[Endpoint] = &[
    counter::GET,
    counter::INCREMENT,
    counter::DECREMENT,
    counter::RESET,
    greetings::LIST,
    greetings::CREATE,
    greetings::DELETE,
];

/// 404 body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

/// 400 body. `field` is the dotted path of the first offending field, when there is one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

fn param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':').filter(|name| !name.is_empty())
}

fn collect_params<I, K, V>(params: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: ToString,
{
    params
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.to_string()))
        .collect()
}

/// Substitute `:name` segments of `template` with values from `params`.
///
/// Segments with no matching parameter are left as they are.
pub fn build_url<I, K, V>(template: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: ToString,
{
    let params = collect_params(params);
    template
        .split('/')
        .map(|seg| match param_name(seg).and_then(|name| params.get(name)) {
            Some(value) => value.as_str(),
            None => seg,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Like [`build_url`], but every `:name` segment must be resolved.
pub fn build_url_strict<I, K, V>(template: &str, params: I) -> Result<String, ContractError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: ToString,
{
    let params = collect_params(params);
    let mut out = Vec::new();
    for seg in template.split('/') {
        match param_name(seg) {
            Some(name) => {
                let value = params
                    .get(name)
                    .ok_or_else(|| ContractError::MissingParam(name.to_string()))?;
                out.push(value.as_str());
            }
            None => out.push(seg),
        }
    }
    Ok(out.join("/"))
}
