//! REST API Client
//!
//! Thin reqwest wrapper over the marketplace backend, organized by domain.
//! Every response is decoded through the single `Envelope` shape.

mod error;
mod items;
mod notifications;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use market_core::wire::{Envelope, ErrorBody};

use crate::{config, session};

pub use error::ApiError;
pub use items::*;
pub use notifications::*;

/// HTTP client bound to a base URL and an optional bearer token
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Client carrying the end-user token (if signed in)
    pub fn user() -> Self {
        Self::new(config::api_base_url(), session::user_token())
    }

    /// Client carrying the admin token (if any)
    pub fn admin() -> Self {
        Self::new(config::api_base_url(), session::admin_token())
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| ApiError::Config(format!("{}: {}", raw, e)))
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn require_token(&self) -> Result<(), ApiError> {
        if self.token.is_some() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let req = self.with_auth(self.http.get(self.url(path)?).query(query));
        let body = send(req).await?;
        decode(&body)
    }

    /// PUT without a request body; the response payload is not needed
    async fn put(&self, path: &str) -> Result<(), ApiError> {
        let req = self.with_auth(self.http.put(self.url(path)?));
        send(req).await.map(|_| ())
    }
}

/// Escape an id for use as a single path segment
fn segment(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}

/// Send and return the body of a 2xx response
async fn send(req: RequestBuilder) -> Result<String, ApiError> {
    let response = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(status, &body)?;
    Ok(body)
}

fn check_status(status: StatusCode, body: &str) -> Result<(), ApiError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized);
    }
    if status.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
    Err(ApiError::Status { status: status.as_u16(), message })
}

fn decode<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope
        .into_result()
        .map_err(|message| ApiError::Status { status: 200, message })
}
