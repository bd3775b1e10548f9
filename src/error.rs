//! Typed errors and HTTP mapping.

use crate::response::falha;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
    #[error("seed file {path}: {source}")]
    SeedRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("seed file {path}: {source}")]
    SeedParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: i64 },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Carries the collection-specific message, e.g. "Cliente não encontrado".
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Credenciais inválidas")]
    InvalidCredentials,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        };
        (status, falha(self.to_string())).into_response()
    }
}
