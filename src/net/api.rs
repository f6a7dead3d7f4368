//! Authenticated REST client for the `/selfhosted` collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ServerStore` is the only caller. Every request passes through
//! [`ApiClient::prepare`], which applies the fixed JSON content type and the
//! bearer token currently held by the injected [`Session`].
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies each map to
//! one [`ApiError`] variant. Each call resolves or fails exactly once; there
//! are no retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use super::types::{NewServer, SelfHostedServer, ServerPatch};
use crate::config::ClientConfig;
use crate::state::session::Session;

const COLLECTION_PATH: &str = "/selfhosted";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with a non-success status.
    #[error("{method} {path} failed: status {status}")]
    Status { method: Method, path: String, status: u16, body: String },

    /// A success body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A request payload could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

fn server_path(id: i64) -> String {
    format!("{COLLECTION_PATH}/{id}")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// REST facade bound to one base URL and one session.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, session, transport }
    }

    /// Build a client with the transport for the current build target.
    ///
    /// # Errors
    ///
    /// Returns an error if the native HTTP client cannot be constructed.
    pub fn for_target(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        #[cfg(feature = "csr")]
        let transport: Arc<dyn Transport> = Arc::new(super::transport::GlooTransport);
        #[cfg(all(not(feature = "csr"), not(target_arch = "wasm32")))]
        let transport: Arc<dyn Transport> = Arc::new(super::transport::ReqwestTransport::new()?);
        Ok(Self::new(config.api_base_url.clone(), session, transport))
    }

    /// Build the outgoing request for `method` + `path`, with default headers
    /// and the bearer token (if any) attached.
    #[must_use]
    pub fn prepare(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        let mut request = ApiRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body,
        };
        self.intercept(&mut request);
        request
    }

    fn intercept(&self, request: &mut ApiRequest) {
        if let Some(token) = self.session.token() {
            request.headers.push(("Authorization".to_owned(), bearer(&token)));
        }
    }

    async fn call(&self, method: Method, path: &str, body: Option<String>) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(method, path, body);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                method,
                path: path.to_owned(),
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }

    async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let response = self.call(method, path, body).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET /selfhosted`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// body that is not an array of servers.
    pub async fn list_servers(&self) -> Result<Vec<SelfHostedServer>, ApiError> {
        self.call_json(Method::Get, COLLECTION_PATH, None).await
    }

    /// `POST /selfhosted`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable created record.
    pub async fn create_server(&self, payload: &NewServer) -> Result<SelfHostedServer, ApiError> {
        let body = encode(payload)?;
        self.call_json(Method::Post, COLLECTION_PATH, Some(body)).await
    }

    /// `PUT /selfhosted/{id}` with a partial payload.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable updated record.
    pub async fn update_server(&self, id: i64, patch: &ServerPatch) -> Result<SelfHostedServer, ApiError> {
        let body = encode(patch)?;
        self.call_json(Method::Put, &server_path(id), Some(body)).await
    }

    /// `DELETE /selfhosted/{id}`. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete_server(&self, id: i64) -> Result<(), ApiError> {
        self.call(Method::Delete, &server_path(id), None).await?;
        Ok(())
    }
}

fn encode<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))
}
