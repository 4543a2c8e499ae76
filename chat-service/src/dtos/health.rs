use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverallHealth {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DependencyHealth {
    Connected,
    Error,
    NotConfigured,
}

/// Basic liveness response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: OverallHealth,
    #[schema(example = "0.1.0")]
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceHealthStatus {
    pub status: DependencyHealth,
    #[schema(example = "Connected successfully")]
    pub message: String,
}

/// Health response including per-dependency connectivity.
#[derive(Debug, Serialize, ToSchema)]
pub struct DetailedHealthCheck {
    pub status: OverallHealth,
    pub version: String,
    pub services: HashMap<String, ServiceHealthStatus>,
}
