use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use users_api::config::load_config;
use users_api::health::HealthState;
use users_api::postgres::create_pool;
use users_api::types::StartupError;
use users_api::user::repository::PgUserRepository;
use users_api::user::service::UserService;
use users_api::{configure_routes, SERVICE_NAME, VERSION};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let pool = create_pool(&config.database)?;

    let service = web::Data::new(UserService::new(Arc::new(PgUserRepository::new(pool))));
    let health_state = web::Data::new(HealthState::new(SERVICE_NAME, VERSION));

    let (host, port) = config.server.bind_address();
    log::info!("Server is running at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .app_data(health_state.clone())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
