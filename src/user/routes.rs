//! User management routes

use crate::user::error::{ErrorResponse, UserError, BAD_REQUEST};
use crate::user::handlers;
use actix_web::{error, error::JsonPayloadError, web, HttpResponse, Scope};

/// Configure user management routes
pub fn configure_user_routes() -> Scope {
    web::scope("/users")
        .app_data(json_config())
        .route("", web::post().to(handlers::create_user))
        .route("", web::get().to(handlers::list_users))
}

/// Body rejection policy for `POST /users`.
///
/// Well-formed JSON of the wrong shape fails like any other create attempt
/// (generic 500). Only bodies that are not JSON at all get a 400. Neither
/// response carries the parser message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = match &err {
            JsonPayloadError::Deserialize(e) if e.is_data() => {
                UserError::InvalidPayload(e.to_string()).create_failed_response()
            },
            _ => {
                log::warn!("Rejected create payload: {}", err);
                HttpResponse::BadRequest().json(ErrorResponse::new(BAD_REQUEST))
            },
        };
        error::InternalError::from_response(err, response).into()
    })
}
