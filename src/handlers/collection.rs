//! Collection CRUD handlers: list, create, update, delete.
//! One set of handlers serves every collection; the path segment picks it.

use crate::error::AppError;
use crate::extractors::{JsonObject, RecordId};
use crate::response::{sucesso, sucesso_com, Sucesso};
use crate::state::AppState;
use crate::store::{Collection, Record};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

pub const UNKNOWN_COLLECTION: &str = "Recurso não encontrado";

fn collection<'a>(state: &'a AppState, path_segment: &str) -> Result<&'a Collection, AppError> {
    state
        .store
        .collection_by_path(path_segment)
        .ok_or(AppError::NotFound(UNKNOWN_COLLECTION))
}

pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<Json<Vec<Record>>, AppError> {
    let collection = collection(&state, &path_segment)?;
    Ok(Json(collection.list()))
}

pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<Json<Value>, AppError> {
    let collection = collection(&state, &path_segment)?;
    let record = collection.create(body);
    Ok(sucesso_com(collection.kind().response_key, record))
}

pub async fn update(
    State(state): State<AppState>,
    record_id: RecordId,
    JsonObject(patch): JsonObject,
) -> Result<Json<Value>, AppError> {
    let collection = collection(&state, &record_id.path_segment)?;
    let id = record_id
        .id
        .ok_or(AppError::NotFound(collection.kind().not_found))?;
    let record = collection.update(id, patch)?;
    Ok(sucesso_com(collection.kind().response_key, record))
}

pub async fn delete(
    State(state): State<AppState>,
    record_id: RecordId,
) -> Result<Json<Sucesso>, AppError> {
    let collection = collection(&state, &record_id.path_segment)?;
    let id = record_id
        .id
        .ok_or(AppError::NotFound(collection.kind().not_found))?;
    collection.delete(id)?;
    Ok(sucesso())
}
