//! User-related error types

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when inserting a user fails
pub const CREATE_USER_FAILED: &str = "Erro ao criar usuário";

/// Message returned for bodies that are not JSON at all
pub const BAD_REQUEST: &str = "Bad Request";

/// Message returned for any other unexpected failure
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Standard error response format
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Persistence failures raised by the user repository
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database connection error: {0}")]
    Pool(String),

    #[error("Row mapping error: {0}")]
    RowMapping(String),

    #[error("Unusable create payload: {0}")]
    InvalidPayload(String),
}

impl UserError {
    /// Response for a failed insert. The cause is logged, never returned.
    pub fn create_failed_response(&self) -> HttpResponse {
        log::error!("Failed to create user: {}", self);
        HttpResponse::InternalServerError().json(ErrorResponse::new(CREATE_USER_FAILED))
    }
}

impl ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("Unhandled user error: {}", self);
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(INTERNAL_SERVER_ERROR))
    }
}

impl From<tokio_postgres::Error> for UserError {
    fn from(error: tokio_postgres::Error) -> Self {
        UserError::Database(error.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for UserError {
    fn from(error: deadpool_postgres::PoolError) -> Self {
        UserError::Pool(error.to_string())
    }
}
