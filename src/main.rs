use aios_tracker::config::{Config, ConfigError};
use aios_tracker::db::{self, DbError};
use aios_tracker::routes;
use aios_tracker::state::AppState;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] DbError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let pool = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections).await?;
            tracing::info!(max_connections = config.db_max_connections, "database connected and migrated");
            Some(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, running without persistence");
            None
        }
    };

    tracing::info!(public_dir = %config.public_dir.display(), "serving static files");
    let state = AppState::new(pool, config.public_dir.clone());

    let app = routes::app(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "aios-tracker listening");
    axum::serve(listener, app).await?;
    Ok(())
}
