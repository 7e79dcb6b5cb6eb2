//! Request-body extraction.
//!
//! Bodies are parsed according to their content type: JSON for
//! `application/json`, key/value pairs for
//! `application/x-www-form-urlencoded`. An empty body or one of another
//! content type becomes an empty object, leaving it to the handler to report
//! what is absent. A JSON body that does not parse, or whose top level is not
//! an object or array, is rejected with 400 before any handler runs.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

/// Body kinds the gateway understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase());

        match mime.as_deref() {
            Some("application/json") => BodyKind::Json,
            Some(m) if m.starts_with("application/") && m.ends_with("+json") => BodyKind::Json,
            Some("application/x-www-form-urlencoded") => BodyKind::Form,
            _ => BodyKind::Other,
        }
    }
}

/// Reasons a request body is refused.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("Malformed JSON body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("JSON body must be an object or an array")]
    NotAContainer,
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected request body");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Request body as a JSON value.
#[derive(Debug, Clone)]
pub struct LenientBody(pub Value);

impl<S> FromRequest<S> for LenientBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = BodyKind::from_content_type(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_body(kind, &bytes)
            .map(LenientBody)
            .map_err(IntoResponse::into_response)
    }
}

/// Decode `bytes` as `kind`.
pub fn parse_body(kind: BodyKind, bytes: &[u8]) -> Result<Value, BodyError> {
    if bytes.is_empty() {
        return Ok(empty_object());
    }

    match kind {
        BodyKind::Json => match serde_json::from_slice(bytes)? {
            value @ (Value::Object(_) | Value::Array(_)) => Ok(value),
            _ => Err(BodyError::NotAContainer),
        },
        BodyKind::Form => Ok(parse_form(bytes)),
        BodyKind::Other => Ok(empty_object()),
    }
}

/// Form fields as strings; a repeated key collects its values into an array.
fn parse_form(bytes: &[u8]) -> Value {
    let mut fields = Map::new();
    for (key, value) in url::form_urlencoded::parse(bytes) {
        let value = Value::String(value.into_owned());
        match fields.get_mut(key.as_ref()) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                fields.insert(key.into_owned(), value);
            }
        }
    }
    Value::Object(fields)
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_type_detection() {
        assert_eq!(BodyKind::from_content_type(Some("application/json")), BodyKind::Json);
        assert_eq!(
            BodyKind::from_content_type(Some("Application/JSON; charset=utf-8")),
            BodyKind::Json
        );
        assert_eq!(
            BodyKind::from_content_type(Some("application/x-www-form-urlencoded")),
            BodyKind::Form
        );
        assert_eq!(BodyKind::from_content_type(Some("text/plain")), BodyKind::Other);
        assert_eq!(BodyKind::from_content_type(None), BodyKind::Other);
    }

    #[test]
    fn test_json_body() {
        let value = parse_body(BodyKind::Json, br#"{"a": 1, "b": "2"}"#).unwrap();
        assert_eq!(value, json!({"a": 1, "b": "2"}));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            parse_body(BodyKind::Json, b"{not json"),
            Err(BodyError::Malformed(_))
        ));
        assert!(matches!(
            parse_body(BodyKind::Json, b"   "),
            Err(BodyError::Malformed(_))
        ));
    }

    #[test]
    fn test_scalar_json_is_rejected() {
        assert!(matches!(
            parse_body(BodyKind::Json, b"5"),
            Err(BodyError::NotAContainer)
        ));
        assert!(matches!(
            parse_body(BodyKind::Json, br#""text""#),
            Err(BodyError::NotAContainer)
        ));
    }

    #[test]
    fn test_form_body_values_are_strings() {
        let value = parse_body(BodyKind::Form, b"a=1&b=2.5").unwrap();
        assert_eq!(value, json!({"a": "1", "b": "2.5"}));
    }

    #[test]
    fn test_repeated_form_key_becomes_array() {
        let value = parse_body(BodyKind::Form, b"a=1&a=2&a=3&b=4").unwrap();
        assert_eq!(value, json!({"a": ["1", "2", "3"], "b": "4"}));
    }

    #[test]
    fn test_empty_or_unknown_is_empty_object() {
        assert_eq!(parse_body(BodyKind::Json, b"").unwrap(), json!({}));
        assert_eq!(parse_body(BodyKind::Form, b"").unwrap(), json!({}));
        assert_eq!(parse_body(BodyKind::Other, b"a=1").unwrap(), json!({}));
    }

    #[test]
    fn test_rejection_is_bad_request() {
        let response = BodyError::NotAContainer.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
