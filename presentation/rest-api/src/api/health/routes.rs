use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::Serialize;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Object)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Liveness check; does not touch the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
