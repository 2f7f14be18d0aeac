use axum::{
    async_trait,
    body::Bytes,
    extract::{Form, FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;

use crate::{error::AppError, models::user::SignupPayload};

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Non-string JSON scalars are kept as their JSON text; `null` means absent.
fn field_text(object: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn payload_from_json(body: &[u8]) -> Result<SignupPayload, AppError> {
    if body.is_empty() {
        return Ok(SignupPayload::default());
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))?;
    match value {
        Value::Object(object) => Ok(SignupPayload {
            email: field_text(&object, "email"),
            password: field_text(&object, "password"),
        }),
        _ => Ok(SignupPayload::default()),
    }
}

/// Accepts `email`/`password` from either a JSON or a form-encoded body.
/// Anything else yields an empty payload rather than a rejection.
#[async_trait]
impl<S> FromRequest<S> for SignupPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::InvalidBody(e.body_text()))?;
                payload_from_json(&body)
            }
            BodyKind::Form => {
                let Form(payload) = Form::<SignupPayload>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::InvalidBody(e.body_text()))?;
                Ok(payload)
            }
            BodyKind::Other => Ok(SignupPayload::default()),
        }
    }
}
