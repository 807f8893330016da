use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod models;
mod notes;

use config::Config;
use db::Database;
use notes::NoteService;

pub struct AppState {
    pub db: Arc<Database>,
    pub notes: NoteService,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            notes: NoteService::new(Arc::clone(&db)),
            db,
        }
    }
}

/// Open CORS policy: any origin, method and header.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    log::info!(
        "Initializing database at {} (pool size {})",
        config.database_url,
        config.db_pool_size
    );
    let db = Database::new(&config.database_url, config.db_pool_size)
        .map_err(|e| std::io::Error::other(format!("Failed to initialize database: {}", e)))?;
    let db = Arc::new(db);

    log::info!("Listening on http://{}:{}", config.bind_host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState::new(Arc::clone(&db))))
            .wrap(Logger::default())
            .wrap(cors())
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind((config.bind_host.as_str(), config.port))?
    .run()
    .await
}
