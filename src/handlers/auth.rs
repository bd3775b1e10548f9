//! Login/logout handlers. The session they maintain gates nothing.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::response::{sucesso, sucesso_com, Sucesso};
use crate::state::AppState;
use crate::store::USUARIOS;
use axum::{extract::State, Json};
use serde_json::Value;

/// POST /login with `{email, senha}`. Answers with the full stored user, plaintext password included.
pub async fn login(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<Value>, AppError> {
    let user = state.store.login(body.get("email"), body.get("senha"))?;
    Ok(sucesso_com(USUARIOS.response_key, user))
}

pub async fn logout(State(state): State<AppState>) -> Json<Sucesso> {
    state.store.logout();
    sucesso()
}
