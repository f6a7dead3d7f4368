//! Wire DTOs for the self-hosted server REST collection.
//!
//! DESIGN
//! ======
//! Field names mirror the service's camelCase JSON. Optional fields are
//! skipped on serialization so partial update payloads never send `null`
//! for a field the caller did not touch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Opaque per-server configuration. The client stores and forwards it but
/// never interprets its contents.
pub type ServerConfig = serde_json::Map<String, serde_json::Value>;

/// A self-hosted server record as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfHostedServer {
    /// Service-assigned identifier, unique within the collection.
    pub id: i64,
    /// Public domain the server answers on.
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ServerConfig>,
    /// Owning user, set by the service.
    pub owner_id: i64,
}

/// Body of `POST /selfhosted`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewServer {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ServerConfig>,
}

impl NewServer {
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: domain.into(), ip: None, config: None }
    }
}

/// Body of `PUT /selfhosted/{id}`. Omitted fields are left unchanged
/// server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ServerConfig>,
}

impl ServerPatch {
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    #[must_use]
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }
}
