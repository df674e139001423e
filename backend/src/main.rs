mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open the browser: {}", err);
            }
        });
    }

    let client_config = web::Data::new(config.client_config());
    info!("Server running at {} (API {})", url, config.api_base_url);

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .service(services::client_config::configure_routes())
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
