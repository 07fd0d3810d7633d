mod config;
mod db;
mod embedded;
mod services;

use crate::config::ServerConfig;
use crate::db::PenguinRepository;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();
    let url = config.url();

    let repository = PenguinRepository::new(&config.db_path);
    repository
        .init_schema()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    info!("Using catalog database at {:?}", repository.path());

    if !config.no_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("Server running at {}", url);

    let repository = web::Data::new(repository);
    HttpServer::new(move || {
        App::new()
            .app_data(repository.clone())
            .service(services::penguins::configure_routes())
            .default_service(web::route().to(embedded::serve))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
