mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer, middleware};

use corpsite::common::Config;
use corpsite::common::logging::init_logging;
use corpsite::services::BackendClient;

use crate::web::middleware::SecurityHeaders;
use crate::web::security::{CONTACT_WINDOW, RateLimiter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env().map_err(std::io::Error::other)?;
    let client = BackendClient::new(&config).map_err(std::io::Error::other)?;
    log::info!("backend at {}", client.base_url());

    let state = Data::new(web::AppState {
        client,
        rate_limiter: Arc::new(RateLimiter::new(config.contact_rate_limit, CONTACT_WINDOW)),
        config: Arc::new(config.clone()),
    });

    log::info!("listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(middleware::Logger::default())
            .configure(web::handlers::configure)
            .service(Files::new("/static", &state.config.static_dir).prefer_utf8(true))
            .default_service(actix_web::web::to(|| async { web::helpers::not_found() }))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
