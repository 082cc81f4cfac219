//! Users API
//!
//! A small user service built with Actix-web and `PostgreSQL`: creates users
//! from an email and a name, lists them, and answers a root acknowledgment.

pub mod config;
pub mod health;
pub mod mocks;
pub mod postgres;
pub mod types;
pub mod user;

use actix_web::web;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "users-api";

/// Register every route of the service.
///
/// Expects `web::Data<UserService>` and `web::Data<HealthState>` in app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_health_routes).service(user::routes::configure_user_routes());
}
