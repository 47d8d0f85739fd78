mod config;
mod db;
mod services;

use crate::config::Config;
use crate::db::{Database, PractitionerStore, ProductStore};
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let database = Database::new(&config.database_path);
    let practitioners = PractitionerStore::new(database.clone());
    let products = ProductStore::new(database.clone());

    // Create tables and seed them on first start.
    practitioners
        .initialize()
        .and_then(|_| products.initialize())
        .map_err(io::Error::other)?;

    info!("Using database {}", database.path().display());
    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(services::cors())
            .wrap(Logger::default())
            .configure(services::configure(practitioners.clone(), products.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
