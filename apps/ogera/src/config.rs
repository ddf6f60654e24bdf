use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::session::store::{DEFAULT_LOGIN_DELAY, DEFAULT_SESSION_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl StorageBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => bail!("SESSION_STORAGE must be one of memory, file, redis (got '{other}')"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub rust_log: String,
    pub storage: StorageBackend,
    pub session_dir: PathBuf,
    pub redis_url: Option<String>,
    pub session_key: String,
    pub login_delay: Duration,
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage = StorageBackend::parse(
            &lookup("SESSION_STORAGE").unwrap_or_else(|| "file".to_string()),
        )?;
        let redis_url = lookup("REDIS_URL");
        if storage == StorageBackend::Redis && redis_url.is_none() {
            bail!("Required environment variable 'REDIS_URL' is not set (SESSION_STORAGE=redis)");
        }

        let session_key = lookup("SESSION_KEY").unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string());
        if session_key.is_empty() || session_key.contains(['/', '\\']) {
            bail!("SESSION_KEY must be non-empty and must not contain path separators");
        }

        Ok(Config {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            storage,
            session_dir: PathBuf::from(lookup("SESSION_DIR").unwrap_or_else(|| ".ogera".to_string())),
            redis_url,
            session_key,
            login_delay: match lookup("LOGIN_DELAY_MS") {
                Some(ms) => Duration::from_millis(
                    ms.parse::<u64>()
                        .context("LOGIN_DELAY_MS must be a whole number of milliseconds")?,
                ),
                None => DEFAULT_LOGIN_DELAY,
            },
            seed_path: lookup("SEED_PATH").map(PathBuf::from),
        })
    }
}
