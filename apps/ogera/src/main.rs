mod config;
mod dataset;
mod errors;
mod models;
mod navigation;
mod routes;
mod screens;
mod session;
mod shell;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::dataset::Dataset;
use crate::routes::build_router;
use crate::screens::PlatformSettings;
use crate::session::{
    FileStorage, IdentityDirectory, MemoryStorage, RedisStorage, SessionSettings, SessionStorage,
    SessionStore,
};
use crate::shell::Shell;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Ogera v{}", env!("CARGO_PKG_VERSION"));

    let (dataset, dataset_source) = match &config.seed_path {
        Some(path) => (Dataset::from_json_file(path).await?, path.display().to_string()),
        None => (Dataset::demo(), "built-in demo".to_string()),
    };
    let dataset = Arc::new(dataset);
    let directory = Arc::new(IdentityDirectory::new(dataset.identities.clone()));
    info!(
        "Dataset ready ({dataset_source}): {} identities, {} jobs",
        directory.len(),
        dataset.jobs.len()
    );

    let storage = build_storage(&config).await?;
    info!("Session storage: {}", storage.backend());

    let settings = PlatformSettings {
        storage_backend: storage.backend().to_string(),
        session_key: config.session_key.clone(),
        login_delay_ms: config.login_delay.as_millis() as u64,
        dataset_source,
    };

    let session = Arc::new(SessionStore::new(
        directory.clone(),
        storage,
        SessionSettings {
            storage_key: config.session_key.clone(),
            login_delay: config.login_delay,
        },
    ));
    session.restore().await;

    let state = AppState {
        session,
        shell: Arc::new(Mutex::new(Shell::default())),
        dataset,
        directory,
        settings: Arc::new(settings),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port)
        .parse()
        .context("BIND_ADDR and PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the session storage backend named by `SESSION_STORAGE`.
async fn build_storage(config: &Config) -> Result<Arc<dyn SessionStorage>> {
    let storage: Arc<dyn SessionStorage> = match config.storage {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::File => Arc::new(FileStorage::new(&config.session_dir)),
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for redis session storage")?;
            Arc::new(
                RedisStorage::connect(url)
                    .await
                    .context("Failed to connect to Redis")?,
            )
        }
    };
    Ok(storage)
}
