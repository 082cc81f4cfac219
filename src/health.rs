//! Health Check Handlers
//!
//! # Endpoints
//! - `/` - Constant acknowledgment
//! - `/health` - Service status with a storage ping

use crate::user::service::UserService;
use actix_web::{http::StatusCode, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime};

const STORAGE_UNAVAILABLE: &str = "storage unavailable";

/// Body of the root route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelloResponse {
    pub message: String,
}

/// Service status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
}

/// Service health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Service uptime in seconds
    pub uptime: u64,
    pub database: DependencyStatus,
}

/// Individual dependency status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyStatus {
    pub status: ServiceStatus,
    pub response_time_ms: u64,
    pub error: Option<String>,
}

/// Application state for health tracking
#[derive(Debug, Clone)]
pub struct HealthState {
    pub start_time: SystemTime,
    pub version: String,
    pub service_name: String,
}

impl HealthState {
    pub fn new(service_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            start_time: SystemTime::now(),
            version: version.into(),
            service_name: service_name.into(),
        }
    }

    /// Get service uptime in seconds
    pub fn uptime(&self) -> u64 {
        self.start_time.elapsed().unwrap_or(Duration::from_secs(0)).as_secs()
    }
}

/// Root acknowledgment, independent of any state
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(HelloResponse {
        message: "Hello World".to_string(),
    })
}

/// Health check endpoint
pub async fn health_check(
    health_state: web::Data<HealthState>,
    service: web::Data<UserService>,
) -> HttpResponse {
    let database = check_storage(&service).await;
    let status = database.status;

    let report = HealthStatus {
        status,
        service: health_state.service_name.clone(),
        version: health_state.version.clone(),
        timestamp: Utc::now(),
        uptime: health_state.uptime(),
        database,
    };

    let code = match status {
        ServiceStatus::Healthy => StatusCode::OK,
        ServiceStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    HttpResponse::build(code).json(report)
}

async fn check_storage(service: &UserService) -> DependencyStatus {
    let start_time = Instant::now();
    let result = service.check_storage().await;
    let response_time_ms = start_time.elapsed().as_millis().try_into().unwrap_or(u64::MAX);

    match result {
        Ok(()) => DependencyStatus {
            status: ServiceStatus::Healthy,
            response_time_ms,
            error: None,
        },
        Err(e) => {
            log::warn!("Storage health check failed: {}", e);
            DependencyStatus {
                status: ServiceStatus::Unhealthy,
                response_time_ms,
                error: Some(STORAGE_UNAVAILABLE.to_string()),
            }
        },
    }
}

/// Configure health check routes
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(hello)).route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryUserRepository;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn app_data(
        repo: InMemoryUserRepository,
    ) -> (web::Data<HealthState>, web::Data<UserService>) {
        (
            web::Data::new(HealthState::new("test_service", "1.0.0")),
            web::Data::new(UserService::new(Arc::new(repo))),
        )
    }

    #[actix_web::test]
    async fn test_health_state_creation() {
        let state = HealthState::new("test_service", "1.0.0");
        assert_eq!(state.service_name, "test_service");
        assert_eq!(state.version, "1.0.0");
        assert!(state.uptime() < 1);
    }

    #[actix_web::test]
    async fn test_service_status_serialization() {
        let json = serde_json::to_string(&ServiceStatus::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
    }

    #[actix_web::test]
    async fn test_hello() {
        let app = test::init_service(App::new().configure(configure_health_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Hello World" }));
    }

    #[actix_web::test]
    async fn test_health_check_healthy() {
        let (state, service) = app_data(InMemoryUserRepository::new());
        let app = test::init_service(
            App::new().app_data(state).app_data(service).configure(configure_health_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "test_service");
        assert!(body["database"]["error"].is_null());
    }

    #[actix_web::test]
    async fn test_health_check_unhealthy() {
        let (state, service) = app_data(InMemoryUserRepository::with_failing_reads());
        let app = test::init_service(
            App::new().app_data(state).app_data(service).configure(configure_health_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"]["error"], "storage unavailable");
        assert!(!body.to_string().contains("simulated connection failure"));
    }
}
