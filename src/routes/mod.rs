//! Router assembly: API routes, common routes, static files and CORS.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir};

/// Full application: `/api/...`, `/health`, `/version`, and `static_dir` for everything else.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .nest("/api", api_routes(state))
        .merge(common_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
}
