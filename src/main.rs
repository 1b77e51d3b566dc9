use actix_web::{web, App, HttpServer};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use conflink::cli::{self, Cli};
use conflink::config::Config;
use conflink::logging;
use conflink::services::{HealthService, ShortenService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let args = Cli::parse();

    // CLI Mode
    if let Some(command) = args.command {
        if let Err(e) = cli::run_command(command) {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
        return Ok(());
    }

    // Server Mode
    let config = Config::from_env();
    let _log_guard = logging::init_logging(&config);

    match config.default_base_url {
        Some(ref base) => info!("Default short-link base: {}", base),
        None => info!("No default base configured, deriving from input URLs"),
    }

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    let app_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_config.clone()))
            .route("/api/shorten", web::post().to(ShortenService::post_shorten))
            .route(
                "/api/decode/{token}",
                web::get().to(ShortenService::get_decode),
            )
            .route("/health", web::get().to(HealthService::health_check))
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
