mod assets;
mod conf;

use crate::assets::{serve_embedded, Assets, STATIC_DIR};
use crate::conf::Cli;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    env_logger::init_from_env(Env::default().default_filter_or(cli.log_filter()));
    let url = cli.url();

    if !cli.no_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("Portfolio running at {}", url);

    let assets = Assets(&STATIC_DIR);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(assets))
            .default_service(web::route().to(serve_embedded))
    })
    .bind((cli.host.as_str(), cli.port))?
    .run()
    .await
}
