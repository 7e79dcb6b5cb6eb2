//! Outbound request description.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// Methods the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    /// Whether a request body is written for this verb.
    pub fn carries_body(self) -> bool {
        matches!(self, HttpVerb::Post | HttpVerb::Put | HttpVerb::Patch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpVerb> for reqwest::Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => reqwest::Method::GET,
            HttpVerb::Post => reqwest::Method::POST,
            HttpVerb::Put => reqwest::Method::PUT,
            HttpVerb::Patch => reqwest::Method::PATCH,
            HttpVerb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Method and headers for a single fetch.
///
/// Header names are applied exactly as given.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub method: HttpVerb,
    pub headers: HashMap<String, String>,
}

impl FetchOptions {
    pub fn new(method: HttpVerb) -> Self {
        Self {
            method,
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Request payload: raw text, or a value serialised to JSON on send.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchBody {
    Text(String),
    Json(Value),
}

impl FetchBody {
    /// Empty text, or a JSON value with no content: null, false, zero or "".
    fn is_empty(&self) -> bool {
        match self {
            FetchBody::Text(text) => text.is_empty(),
            FetchBody::Json(value) => match value {
                Value::Null => true,
                Value::Bool(b) => !b,
                Value::Number(n) => n.as_f64() == Some(0.0),
                Value::String(s) => s.is_empty(),
                Value::Array(_) | Value::Object(_) => false,
            },
        }
    }

    fn into_text(self) -> String {
        match self {
            FetchBody::Text(text) => text,
            FetchBody::Json(value) => value.to_string(),
        }
    }
}

impl From<String> for FetchBody {
    fn from(text: String) -> Self {
        FetchBody::Text(text)
    }
}

impl From<&str> for FetchBody {
    fn from(text: &str) -> Self {
        FetchBody::Text(text.to_string())
    }
}

impl From<Value> for FetchBody {
    fn from(value: Value) -> Self {
        FetchBody::Json(value)
    }
}

/// The text actually written for `method`, if any.
///
/// Bodies are only sent for POST, PUT and PATCH, and never when empty.
pub fn payload_for(method: HttpVerb, body: Option<FetchBody>) -> Option<String> {
    match body {
        Some(body) if method.carries_body() && !body.is_empty() => Some(body.into_text()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_only_for_mutating_verbs() {
        for verb in [HttpVerb::Post, HttpVerb::Put, HttpVerb::Patch] {
            assert_eq!(payload_for(verb, Some("x".into())), Some("x".to_string()));
        }
        for verb in [HttpVerb::Get, HttpVerb::Delete] {
            assert_eq!(payload_for(verb, Some("x".into())), None);
        }
    }

    #[test]
    fn test_empty_body_is_skipped() {
        assert_eq!(payload_for(HttpVerb::Post, Some("".into())), None);
        assert_eq!(payload_for(HttpVerb::Post, Some(Value::Null.into())), None);
        assert_eq!(payload_for(HttpVerb::Post, None), None);
    }

    #[test]
    fn test_json_without_content_is_skipped() {
        for value in [json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(payload_for(HttpVerb::Post, Some(value.clone().into())), None, "{value}");
        }
        for value in [json!(true), json!(1), json!("x"), json!({}), json!([])] {
            assert!(payload_for(HttpVerb::Post, Some(value.clone().into())).is_some(), "{value}");
        }
    }

    #[test]
    fn test_json_body_is_serialised() {
        let body = FetchBody::from(json!({"title": "hello", "userId": 1}));
        let payload = payload_for(HttpVerb::Put, Some(body)).unwrap();
        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed, json!({"title": "hello", "userId": 1}));
    }

    #[test]
    fn test_text_body_is_sent_verbatim() {
        let raw = r#"{"already":"encoded"}"#;
        assert_eq!(payload_for(HttpVerb::Patch, Some(raw.into())).as_deref(), Some(raw));
    }
}
