//! Request body as a JSON object, with a missing body read as `{}`.

use crate::store::Record;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};

/// Body fields of a request. An empty body, or one not declared as JSON,
/// yields an empty record so the handler still answers with its own envelope.
/// Malformed JSON and non-object JSON keep axum's `Json` rejections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonObject(pub Record);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(JsonObject::default());
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.is_empty() {
            return Ok(JsonObject::default());
        }
        let Json(record) = Json::<Record>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        Ok(JsonObject(record))
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
