//! Standard response envelope helpers.
//!
//! Every body other than a plain listing carries `sucesso`; failures add a
//! human-readable `mensagem`.

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
pub struct Sucesso {
    pub sucesso: bool,
}

#[derive(Serialize)]
pub struct Falha {
    pub sucesso: bool,
    pub mensagem: String,
}

/// `{"sucesso": true}`
pub fn sucesso() -> Json<Sucesso> {
    Json(Sucesso { sucesso: true })
}

/// `{"sucesso": true, "<key>": record}`, e.g. key `cliente` for the clients collection.
pub fn sucesso_com(key: &str, record: Map<String, Value>) -> Json<Value> {
    let mut body = Map::with_capacity(2);
    body.insert("sucesso".into(), Value::Bool(true));
    body.insert(key.to_string(), Value::Object(record));
    Json(Value::Object(body))
}

pub fn falha(mensagem: String) -> Json<Falha> {
    Json(Falha {
        sucesso: false,
        mensagem,
    })
}
