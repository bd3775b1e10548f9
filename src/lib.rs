//! Cadastro API: in-memory REST backend for users, clients and suppliers.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{load_seed, validate_seed, SeedData, ServerConfig};
pub use error::{AppError, ConfigError};
pub use response::{falha, sucesso, sucesso_com};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{Collection, EntityKind, Record, Session, Store};
