//! Single-shot upstream requests.
//!
//! # Responsibilities
//! - Validate the target scheme before any network activity
//! - Apply method, headers and (for POST/PUT/PATCH) the payload
//! - Accumulate the response body until the stream ends
//! - Convert transport errors into `REQUEST_ERROR`
//!
//! # Design Decisions
//! - Each call is independent; no idle connections are pooled
//! - Redirects are not followed; a 3xx body is returned like any other
//! - Proxy environment variables are ignored; calls go straight to the target
//! - No deadline unless one is configured; a hung upstream otherwise
//!   holds the call open indefinitely

use std::time::{Duration, Instant};

use tokio::time::timeout;
use url::Url;

use crate::client::failure::ClientFailure;
use crate::client::request::{payload_for, FetchBody, FetchOptions};
use crate::client::transport::{request_target, Transport};
use crate::errors::ErrorCode;
use crate::observability::metrics;

const TRANSPORT_ERROR_MESSAGE: &str = "server responded with error";

/// Outbound HTTP(S) client.
#[derive(Debug, Clone)]
pub struct OutboundClient {
    http: reqwest::Client,
    timeout: Option<Duration>,
}

impl OutboundClient {
    /// Create a client. `timeout` bounds each whole exchange when set.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()?;
        Ok(Self { http, timeout })
    }

    /// Perform one request and resolve with the full response body.
    ///
    /// Fails with `BAD_URI` for any scheme other than http/https, and with
    /// `REQUEST_ERROR` for any transport failure. The upstream status code is
    /// not inspected.
    pub async fn fetch(
        &self,
        url: &Url,
        options: &FetchOptions,
        body: Option<FetchBody>,
    ) -> Result<String, ClientFailure> {
        let transport = Transport::for_url(url)?;
        let payload = payload_for(options.method, body);

        tracing::debug!(
            method = %options.method,
            host = url.host_str().unwrap_or_default(),
            port = transport.port_for(url),
            target = %request_target(url),
            "Fetching upstream"
        );

        let started = Instant::now();
        let exchange = self.exchange(url, options, payload);
        let outcome = match self.timeout {
            Some(limit) => match timeout(limit, exchange).await {
                Ok(result) => result,
                Err(elapsed) => {
                    tracing::error!(url = %url, timeout = ?limit, "Upstream request timed out");
                    Err(ClientFailure::new(ErrorCode::REQUEST_ERROR, TRANSPORT_ERROR_MESSAGE)
                        .with_cause(elapsed))
                }
            },
            None => exchange.await,
        };

        metrics::record_upstream(options.method.as_str(), outcome.is_ok(), started);
        outcome
    }

    async fn exchange(
        &self,
        url: &Url,
        options: &FetchOptions,
        payload: Option<String>,
    ) -> Result<String, ClientFailure> {
        let mut request = self.http.request(options.method.into(), url.clone());
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(payload) = payload {
            tracing::info!("Sending payload {}", payload);
            request = request.body(payload);
        }

        let mut response = request.send().await.map_err(transport_failure)?;

        let mut acc: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(transport_failure)? {
            acc.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&acc).into_owned())
    }
}

fn transport_failure(err: reqwest::Error) -> ClientFailure {
    tracing::error!(error = %err, "Upstream request failed");
    ClientFailure::new(ErrorCode::REQUEST_ERROR, TRANSPORT_ERROR_MESSAGE).with_cause(err)
}
