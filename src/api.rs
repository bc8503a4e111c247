//!
//! # HTTP Client Adapter
//!
//! A thin wrapper over `reqwest` that pins the base origin and attaches the
//! bearer token, nothing else. Before every outgoing request it re-reads the
//! persisted session from storage (not the in-memory copy; the session
//! store's write-through discipline keeps the two equal) and, if a token is
//! present, sets `Authorization: Bearer <token>` on that request.
//!
//! There is deliberately no response-side logic here: no retry, no token
//! refresh, no caching, and no interpretation of status codes beyond lifting
//! the server's own error message out of a rejection body.

use crate::error::AppError;
use crate::storage::SessionStorage;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: SessionStorage,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, storage: SessionStorage) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            storage,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request with the bearer token attached when the persisted
    /// session holds one. This is the adapter's single branch.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.storage.load() {
            Some(session) => builder.bearer_auth(session.token),
            None => builder,
        }
    }

    /// Sends a prepared request and surfaces server rejections as
    /// [`AppError::Api`] carrying the backend's own message.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Api {
            status: status.as_u16(),
            message: extract_error_message(status, &body),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send(self.request(Method::PUT, path).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// Lifts the human-readable message out of a rejection body.
///
/// Backends in this family answer rejections with `{"message": ...}` or
/// `{"error": ...}`; the message is delivered to the caller unmodified.
/// A body that is neither falls back to its raw text, then to the HTTP
/// reason phrase.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
