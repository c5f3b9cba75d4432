use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use user_registry::config::EnvConfig;
use user_registry::db::store_service::StoreService;
use user_registry::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store = Arc::new(
        StoreService::new(&config.db_url)
            .await
            .expect("Failed to initialize StoreService"),
    );

    log::info!("User registry listening on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
