//! Load server settings from the environment and seed data from JSON files.

use crate::config::{validate_seed, SeedData};
use crate::error::ConfigError;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served for any path the API does not handle.
    pub static_dir: PathBuf,
    /// JSON seed file; the built-in seed is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `STATIC_DIR` and `SEED_PATH`. Call `dotenvy::dotenv()` first to honour `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let host: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidEnv { var: "HOST", value: host.clone() })?;
        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidEnv { var: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig {
            host,
            port,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()).into(),
            seed_path: get("SEED_PATH").map(PathBuf::from),
        })
    }

    /// Seed from `seed_path` if set, otherwise the built-in data.
    pub async fn seed(&self) -> Result<SeedData, ConfigError> {
        match &self.seed_path {
            Some(path) => load_seed(path).await,
            None => Ok(SeedData::default()),
        }
    }
}

/// Read and validate a seed file: `{"usuarios": [...], "clientes": [...], "fornecedores": [...]}`.
/// Missing collections start empty.
pub async fn load_seed(path: &Path) -> Result<SeedData, ConfigError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::SeedRead {
            path: path.display().to_string(),
            source,
        })?;
    let seed: SeedData = serde_json::from_str(&text).map_err(|source| ConfigError::SeedParse {
        path: path.display().to_string(),
        source,
    })?;
    validate_seed(&seed)?;
    tracing::debug!(
        path = %path.display(),
        usuarios = seed.usuarios.len(),
        clientes = seed.clientes.len(),
        fornecedores = seed.fornecedores.len(),
        "seed loaded"
    );
    Ok(seed)
}
