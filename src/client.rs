//! Typed HTTP client over the same endpoint table the server routes from.

use crate::contract::{
    build_url_strict, counter, greetings, ContractError, Endpoint, ErrorMessage,
    ValidationErrorBody,
};
use crate::schema::{Counter, Greeting, InsertGreeting};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error("validation: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
    #[error("{endpoint} answered unexpected status {status}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: StatusCode,
    },
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is scheme and authority, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub async fn counter(&self) -> Result<Counter, ClientError> {
        self.call_json(counter::GET).await
    }

    pub async fn increment(&self) -> Result<Counter, ClientError> {
        self.call_json(counter::INCREMENT).await
    }

    pub async fn decrement(&self) -> Result<Counter, ClientError> {
        self.call_json(counter::DECREMENT).await
    }

    pub async fn reset(&self) -> Result<Counter, ClientError> {
        self.call_json(counter::RESET).await
    }

    pub async fn greetings(&self) -> Result<Vec<Greeting>, ClientError> {
        self.call_json(greetings::LIST).await
    }

    pub async fn create_greeting(&self, input: &InsertGreeting) -> Result<Greeting, ClientError> {
        let endpoint = greetings::CREATE;
        let res = self
            .request(endpoint, &self.url(endpoint, None)?)
            .json(input)
            .send()
            .await?;
        match res.status() {
            s if s == endpoint.success => Ok(res.json().await?),
            StatusCode::BAD_REQUEST => {
                let body: ValidationErrorBody = res.json().await?;
                Err(ClientError::Validation {
                    message: body.message,
                    field: body.field,
                })
            }
            status => Err(unexpected(endpoint, status)),
        }
    }

    /// `Ok(false)` when no greeting has this id.
    pub async fn delete_greeting(&self, id: i32) -> Result<bool, ClientError> {
        let endpoint = greetings::DELETE;
        let url = self.url(endpoint, Some(id))?;
        let res = self.request(endpoint, &url).send().await?;
        match res.status() {
            s if s == endpoint.success => Ok(true),
            StatusCode::NOT_FOUND => {
                let body: ErrorMessage = res.json().await?;
                tracing::debug!(id, message = %body.message, "delete missed");
                Ok(false)
            }
            status => Err(unexpected(endpoint, status)),
        }
    }

    fn url(&self, endpoint: Endpoint, id: Option<i32>) -> Result<String, ContractError> {
        let path = build_url_strict(endpoint.path, id.map(|id| ("id", id)))?;
        Ok(format!("{}{}", self.base_url, path))
    }

    fn request(&self, endpoint: Endpoint, url: &str) -> reqwest::RequestBuilder {
        tracing::debug!(endpoint = endpoint.name, url = %url, "request");
        self.http.request(endpoint.method.as_method(), url)
    }

    async fn call_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ClientError> {
        let res = self
            .request(endpoint, &self.url(endpoint, None)?)
            .send()
            .await?;
        expect_success(endpoint, res).await
    }
}

async fn expect_success<T: DeserializeOwned>(
    endpoint: Endpoint,
    res: Response,
) -> Result<T, ClientError> {
    if res.status() != endpoint.success {
        return Err(unexpected(endpoint, res.status()));
    }
    Ok(res.json().await?)
}

fn unexpected(endpoint: Endpoint, status: StatusCode) -> ClientError {
    ClientError::UnexpectedStatus {
        endpoint: endpoint.name,
        status,
    }
}
