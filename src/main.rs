use std::sync::Arc;

use tracing::{error, info};

use board_api::{BoardRepository, Config, Database, WebServer};

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    // Initialize logging
    if let Err(e) = board_api::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        board_api::logging::init_console_only(&config.logging.level);
    }

    info!("Board API");

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database ready ({})", db.backend_name());

    let store = Arc::new(BoardRepository::new(&db));

    let server = match WebServer::new(&config, store) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to configure web server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        db.close().await;
        std::process::exit(1);
    }

    db.close().await;
    info!("Shutdown complete");
}
