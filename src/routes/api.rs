//! API routes. Collections are addressed by path segment so one handler set serves all of them.

use crate::handlers::{create, delete as delete_handler, list, login, logout, update};
use crate::state::AppState;
use axum::{
    routing::{post, put},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

/// Largest accepted JSON body.
const BODY_LIMIT: usize = 100 * 1024;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/:path_segment", post(create).get(list))
        .route("/:path_segment/:id", put(update).delete(delete_handler))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .with_state(state)
}
