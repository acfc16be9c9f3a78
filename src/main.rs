use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bulletin::config::EnvConfig;
use bulletin::db::postgres_service::PostgresService;
use bulletin::db::store::Store;
use bulletin::routes::configure_routes;
use bulletin::utils::mail::{Mailer, ResendMailer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store: Arc<dyn Store> = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );
    let mailer: Arc<dyn Mailer> =
        Arc::new(ResendMailer::new(&config.mail).expect("Failed to build mail client"));

    let config_data = web::Data::new(config);
    let store_data = web::Data::new(store);
    let mailer_data = web::Data::new(mailer);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .app_data(store_data.clone())
            .app_data(mailer_data.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
