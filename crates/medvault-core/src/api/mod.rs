//! REST Client
//!
//! Typed bindings to the inventory backend, organized by domain. The
//! actual HTTP exchange goes through [`Transport`] so the browser can use
//! `fetch` while tests use an in-memory double.

mod error;
mod medicine;
mod supplier;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::ApiError;

use crate::domain::HealthStatus;
use crate::notice::Notice;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully resolved request: absolute URL and optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request over the wire.
///
/// Returns `Err(ApiError::Network)` only when no response arrived; HTTP
/// error statuses are returned as responses.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Client for the `/api` backend
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health", "Backend is not reachable").await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<R, ApiError> {
        self.execute(Method::Get, path, None, fallback).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(method, path, Some(body), fallback).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        fallback: &str,
    ) -> Result<R, ApiError> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
        };
        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|err| {
            log::error!("{} {} failed: {}", method.as_str(), path, err);
            err
        })?;

        if !response.is_success() {
            let err = ApiError::from_response(response.status, &response.body, fallback);
            log::error!("{} {} -> {}: {}", method.as_str(), path, response.status, err);
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("{} {}: undecodable body: {}", method.as_str(), path, e);
            ApiError::Decode(e.to_string())
        })
    }
}

/// Rendering boundary for reads: on failure, log, hand back the empty value
/// and a notice such as `Error loading medicines: <message>`.
pub fn or_notice<V: Default>(result: Result<V, ApiError>, prefix: &str) -> (V, Option<Notice>) {
    match result {
        Ok(value) => (value, None),
        Err(err) => {
            log::warn!("{}: {}", prefix, err);
            (V::default(), Some(Notice::from_error(prefix, &err)))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{client, FakeTransport};
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = client(FakeTransport::default());
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_health() {
        let api = client(FakeTransport::default().respond(
            200,
            r#"{"status": "healthy", "message": "Medical Storage Management System API is running"}"#,
        ));
        let health = block_on(api.health()).unwrap();
        assert!(health.is_healthy());
        assert_eq!(api.transport().last_request().unwrap().url, "http://localhost:5000/api/health");
    }

    #[test]
    fn test_network_failure_passes_through() {
        let api = client(FakeTransport::default().fail("Failed to fetch"));
        let err = block_on(api.health()).unwrap_err();
        assert_eq!(err, ApiError::Network("Failed to fetch".to_string()));
    }

    #[test]
    fn test_decode_error_on_bad_success_body() {
        let api = client(FakeTransport::default().respond(200, "not json"));
        assert!(matches!(block_on(api.health()), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_or_notice_degrades_to_empty() {
        let result: Result<Vec<u32>, ApiError> = Err(ApiError::Server {
            status: 500,
            message: "Database connection failed".to_string(),
        });
        let (value, notice) = or_notice(result, "Error loading medicines");
        assert!(value.is_empty());
        assert_eq!(
            notice.map(|n| n.message),
            Some("Error loading medicines: Database connection failed".to_string())
        );

        let (value, notice) = or_notice(Ok(vec![1u32]), "Error loading medicines");
        assert_eq!(value, vec![1]);
        assert!(notice.is_none());
    }
}
