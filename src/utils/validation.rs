use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::json;
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Reads an optional string field, trimming it and mapping missing or `null` to empty.
pub fn trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|value| value.map(|value| value.trim().to_string()).unwrap_or_default())
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body read as JSON, or as a form when the request says so.
///
/// An empty body reads as `{}` so missing fields reach validation. Malformed
/// input answers 422 in the same envelope as a failed validation.
pub struct RequestBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for RequestBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|err| malformed_body(err.body_text()))?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let raw: &[u8] = if bytes.iter().all(|byte| byte.is_ascii_whitespace()) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(raw)
            .map(Self)
            .map_err(|err| malformed_body(err.to_string()))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with(FORM_CONTENT_TYPE))
}

fn malformed_body(reason: String) -> Response {
    tracing::warn!("Rejected unreadable request body: {}", reason);

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "success": false,
            "message": "The given data was invalid.",
            "errors": { "body": [reason] },
        })),
    )
        .into_response()
}

pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let field = field.to_string();
            let messages = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid.", field),
                })
                .collect();
            (field, messages)
        })
        .collect()
}

pub fn into_response(errors: ValidationErrors) -> Response {
    let messages = field_messages(&errors);
    let count: usize = messages.values().map(Vec::len).sum();
    let first = messages
        .values()
        .flatten()
        .next()
        .cloned()
        .unwrap_or_else(|| "The given data was invalid.".to_string());

    let message = match count {
        0 | 1 => first,
        2 => format!("{} (and 1 more error)", first),
        n => format!("{} (and {} more errors)", first, n - 1),
    };

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "success": false,
            "message": message,
            "errors": messages,
        })),
    )
        .into_response()
}
