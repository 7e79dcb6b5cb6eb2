//! Response relay: turns an outbound fetch outcome into the inbound response.
//!
//! # Responsibilities
//! - Success: 200 with the upstream body written verbatim
//! - Failure: log the failure message, answer with the error body
//!
//! # Design Decisions
//! - Upstream call attempted exactly once, never retried
//! - The success body is not re-serialised and gets no content type here;
//!   callers set it
//! - Failures are 500 regardless of code unless the policy maps BAD_URI to 400

use std::future::Future;

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::client::ClientFailure;
use crate::config::RelayConfig;
use crate::errors::{make_error, ErrorCode};

/// How failures are mapped to status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayPolicy {
    pub map_bad_uri_to_bad_request: bool,
}

impl RelayPolicy {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            map_bad_uri_to_bad_request: config.map_bad_uri_to_bad_request,
        }
    }

    pub fn status_for(&self, code: ErrorCode) -> StatusCode {
        if self.map_bad_uri_to_bad_request && code == ErrorCode::BAD_URI {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Await `pending` and build the response from its outcome.
pub async fn relay<F>(pending: F, policy: RelayPolicy) -> Response
where
    F: Future<Output = Result<String, ClientFailure>>,
{
    match pending.await {
        Ok(body) => (StatusCode::OK, Body::from(body)).into_response(),
        Err(failure) => {
            tracing::error!(code = %failure.code(), "{}", failure.message());
            let status = policy.status_for(failure.code());
            (status, Json(make_error(failure.code()))).into_response()
        }
    }
}
