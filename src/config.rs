use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum_extra::extract::cookie::Key;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://coursebook.db";
const DEFAULT_UPLOAD_DIR: &str = "static/uploads";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
/// Cookie signing keys are derived from at least this many bytes of secret.
const MIN_SECRET_KEY_BYTES: usize = 32;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub secret_key: Option<String>,
}

impl Config {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let upload_dir = lookup("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR {bind_addr:?}: {e}")))?;

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| AppError::Config(format!("MAX_UPLOAD_BYTES {raw:?}: {e}")))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let secret_key = lookup("SECRET_KEY");
        if let Some(secret) = &secret_key {
            if secret.len() < MIN_SECRET_KEY_BYTES {
                return Err(AppError::Config(format!(
                    "SECRET_KEY must be at least {MIN_SECRET_KEY_BYTES} bytes"
                )));
            }
        }

        Ok(Self {
            database_url,
            upload_dir,
            bind_addr,
            max_upload_bytes,
            secret_key,
        })
    }

    /// Key for signing flash cookies. Without `SECRET_KEY` a random key is
    /// used, so pending flashes do not survive a restart.
    pub fn cookie_key(&self) -> Key {
        match &self.secret_key {
            Some(secret) => Key::derive_from(secret.as_bytes()),
            None => Key::generate(),
        }
    }
}
