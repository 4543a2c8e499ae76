use axum::{Json, extract::State};
use std::collections::HashMap;

use crate::AppState;
use crate::dtos::health::{
    DependencyHealth, DetailedHealthCheck, HealthCheck, OverallHealth, ServiceHealthStatus,
};

/// Liveness probe; performs no dependency checks
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: OverallHealth::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Detailed health including upstream connectivity
#[utoipa::path(
    get,
    path = "/api/v1/health/full",
    responses(
        (status = 200, description = "Per-dependency statuses", body = DetailedHealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_full(State(state): State<AppState>) -> Json<DetailedHealthCheck> {
    let mut services = HashMap::new();

    let openai = if state.gateway.is_available() {
        let (ok, message) = state.gateway.test_connectivity().await;
        ServiceHealthStatus {
            status: if ok {
                DependencyHealth::Connected
            } else {
                DependencyHealth::Error
            },
            message,
        }
    } else {
        ServiceHealthStatus {
            status: DependencyHealth::NotConfigured,
            message: "Service not configured".to_string(),
        }
    };
    services.insert("openai".to_string(), openai);

    let status = if services
        .values()
        .any(|s| s.status == DependencyHealth::Error)
    {
        OverallHealth::Degraded
    } else {
        OverallHealth::Healthy
    };

    Json(DetailedHealthCheck {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    })
}
