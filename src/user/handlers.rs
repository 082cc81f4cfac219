//! User API handlers
//!
//! HTTP handler functions for the `/users` endpoints.

use actix_web::{web, HttpResponse};

use crate::user::{dto::CreateUserRequest, error::UserError, service::UserService};

/// Handle user creation
///
/// Any storage failure is answered with a generic 500.
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> HttpResponse {
    match service.create_user(payload.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => e.create_failed_response(),
    }
}

/// List all users
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, UserError> {
    let users = service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}
