//! End-to-end tests driving the router in-process.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use cadastro_api::{app, AppState, Store};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router() -> Router {
    app(AppState::new(Store::default()), "public")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn names(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|r| r["nome"].as_str().unwrap_or_default())
        .collect()
}

#[tokio::test]
async fn lists_seeded_users() {
    let app = router();
    let (status, body) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["João Silva", "Maria Oliveira"]);
    assert_eq!(body[0]["perfil"], json!("Administrador"));
}

#[tokio::test]
async fn create_user_appends_with_next_id() {
    let app = router();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/usuarios",
        Some(json!({"nome": "Ana", "email": "ana@x.com", "login": "ana", "senha": "1", "perfil": "Usuário"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sucesso"], json!(true));
    assert_eq!(body["usuario"]["id"], json!(3));
    assert_eq!(body["usuario"]["nome"], json!("Ana"));

    let (_, list) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(names(&list), vec!["João Silva", "Maria Oliveira", "Ana"]);
}

#[tokio::test]
async fn create_accepts_missing_fields() {
    let app = router();
    let (status, body) = send(&app, Method::POST, "/api/fornecedores", Some(json!({"email": "z@x.com"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fornecedor"], json!({"id": 3, "email": "z@x.com"}));
}

#[tokio::test]
async fn deleting_client_one_then_creating_does_not_reuse_it() {
    let app = router();
    let (status, body) = send(&app, Method::DELETE, "/api/clientes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"sucesso": true}));

    let (_, list) = send(&app, Method::GET, "/api/clientes", None).await;
    assert_eq!(names(&list), vec!["Cliente B"]);

    let (_, body) = send(&app, Method::POST, "/api/clientes", Some(json!({"nome": "Cliente C"}))).await;
    assert_eq!(body["cliente"]["id"], json!(3));
}

#[tokio::test]
async fn deleting_highest_client_frees_its_id() {
    let app = router();
    send(&app, Method::DELETE, "/api/clientes/2", None).await;
    let (_, body) = send(&app, Method::POST, "/api/clientes", Some(json!({"nome": "Cliente C"}))).await;
    assert_eq!(body["cliente"]["id"], json!(2));
}

#[tokio::test]
async fn deleting_every_client_restarts_ids_at_one() {
    let app = router();
    send(&app, Method::DELETE, "/api/clientes/1", None).await;
    send(&app, Method::DELETE, "/api/clientes/2", None).await;
    let (_, body) = send(&app, Method::POST, "/api/clientes", Some(json!({"nome": "Cliente C"}))).await;
    assert_eq!(body["cliente"]["id"], json!(1));
}

#[tokio::test]
async fn update_merges_partial_patch() {
    let app = router();
    let (status, body) = send(&app, Method::PUT, "/api/fornecedores/1", Some(json!({"telefone": "999"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "sucesso": true,
            "fornecedor": {"id": 1, "nome": "Fornecedor X", "email": "fornecedor@example.com", "telefone": "999"}
        })
    );
}

#[tokio::test]
async fn update_unknown_id_is_not_found_and_changes_nothing() {
    let app = router();
    let (_, before) = send(&app, Method::GET, "/api/usuarios", None).await;
    let (status, body) = send(&app, Method::PUT, "/api/usuarios/9", Some(json!({"nome": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"sucesso": false, "mensagem": "Usuário não encontrado"}));
    let (_, after) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn not_found_messages_are_per_collection() {
    let app = router();
    let (status, body) = send(&app, Method::DELETE, "/api/clientes/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensagem"], json!("Cliente não encontrado"));

    let (status, body) = send(&app, Method::DELETE, "/api/fornecedores/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensagem"], json!("Fornecedor não encontrado"));
}

#[tokio::test]
async fn non_numeric_id_never_matches() {
    let app = router();
    let (status, body) = send(&app, Method::DELETE, "/api/usuarios/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensagem"], json!("Usuário não encontrado"));
    let (_, list) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn id_with_trailing_text_uses_leading_digits() {
    let app = router();
    let (status, _) = send(&app, Method::DELETE, "/api/usuarios/2x", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, list) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(names(&list), vec!["João Silva"]);
}

#[tokio::test]
async fn unknown_collection_is_not_found() {
    let app = router();
    let (status, body) = send(&app, Method::GET, "/api/produtos", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"sucesso": false, "mensagem": "Recurso não encontrado"}));
}

// The login response carries the stored plaintext password. This is known to
// be insecure and is kept so existing clients see the same payload.
#[tokio::test]
async fn login_returns_full_user_including_password() {
    let app = router();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"email": "joao@example.com", "senha": "123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sucesso"], json!(true));
    assert_eq!(body["usuario"]["id"], json!(1));
    assert_eq!(body["usuario"]["nome"], json!("João Silva"));
    assert_eq!(body["usuario"]["senha"], json!("123"));
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = router();
    let (_, before) = send(&app, Method::GET, "/api/usuarios", None).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"email": "joao@example.com", "senha": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"sucesso": false, "mensagem": "Credenciais inválidas"}));
    let (_, after) = send(&app, Method::GET, "/api/usuarios", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn login_is_case_sensitive() {
    let app = router();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"email": "JOAO@example.com", "senha": "123"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_always_succeeds() {
    let app = router();
    let (status, body) = send(&app, Method::POST, "/api/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"sucesso": true}));

    send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"email": "maria@example.com", "senha": "123"})),
    )
    .await;
    let (status, body) = send(&app, Method::POST, "/api/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"sucesso": true}));
}

/// Create, patch, list, delete and re-delete a client; every step's response.
async fn crud_round(app: &Router) -> Vec<(StatusCode, Value)> {
    vec![
        send(app, Method::POST, "/api/clientes", Some(json!({"nome": "Cliente C"}))).await,
        send(app, Method::PUT, "/api/clientes/3", Some(json!({"telefone": "3"}))).await,
        send(app, Method::GET, "/api/clientes", None).await,
        send(app, Method::DELETE, "/api/clientes/3", None).await,
        send(app, Method::DELETE, "/api/clientes/3", None).await,
    ]
}

#[tokio::test]
async fn crud_does_not_depend_on_login_state() {
    let app = router();
    let anonymous = crud_round(&app).await;
    assert_eq!(anonymous[0].1["cliente"]["id"], json!(3));
    assert_eq!(anonymous[4].0, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"email": "maria@example.com", "senha": "123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(crud_round(&app).await, anonymous);

    send(&app, Method::POST, "/api/logout", None).await;
    assert_eq!(crud_round(&app).await, anonymous);
}

#[tokio::test]
async fn update_without_body_on_unknown_id_is_not_found() {
    let app = router();
    let (status, body) = send(&app, Method::PUT, "/api/clientes/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"sucesso": false, "mensagem": "Cliente não encontrado"}));
}

#[tokio::test]
async fn update_without_body_leaves_record_as_is() {
    let app = router();
    let (status, body) = send(&app, Method::PUT, "/api/clientes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cliente"]["nome"], json!("Cliente A"));
    assert_eq!(body["cliente"]["telefone"], json!("1234567890"));
}

#[tokio::test]
async fn create_without_body_stores_id_only() {
    let app = router();
    let (status, body) = send(&app, Method::POST, "/api/clientes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"sucesso": true, "cliente": {"id": 3}}));
}

#[tokio::test]
async fn login_without_body_is_unauthorized() {
    let app = router();
    let (status, body) = send(&app, Method::POST, "/api/login", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"sucesso": false, "mensagem": "Credenciais inválidas"}));
}

#[tokio::test]
async fn malformed_json_is_rejected_by_the_http_layer() {
    let app = router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/clientes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{nome"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let (_, list) = send(&app, Method::GET, "/api/clientes", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn health_and_version() {
    let app = router();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (_, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(body["name"], json!("cadastro-api"));
}
