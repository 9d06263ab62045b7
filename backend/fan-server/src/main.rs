use fan_server::{AppState, build_router, logger};

use fan_config::Config;
use fan_db::{SqliteRecordStore, open_pool};
use fan_wizard::{RegistrationSession, WizardSettings};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fan-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Persistence slot
    let storage_path = config.storage_path()?;
    info!("Opening record store: {}", storage_path.display());
    let pool = open_pool(&storage_path).await?;
    let store = Arc::new(SqliteRecordStore::new(pool, config.storage.key.clone()));

    let session = RegistrationSession::new(store, WizardSettings::from(&config));
    let app_state = AppState::new(session.clone(), config.simulation.randomize_charts);

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }

            let aborted = session.shutdown().await;
            if aborted > 0 {
                warn!("{} pending verifications aborted", aborted);
            }
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
