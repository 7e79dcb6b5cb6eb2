//! Outbound HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! fetch(url, options, body)
//!     → transport.rs (scheme check, default port; BAD_URI before any I/O)
//!     → request.rs (verb, headers, payload selection)
//!     → fetch.rs (send, accumulate body chunks)
//!     → Ok(body text) | Err(ClientFailure)
//! ```
//!
//! # Design Decisions
//! - Only the response body is surfaced; status and headers are dropped
//! - Transport errors are reported once, as `REQUEST_ERROR`
//! - No idle connections are kept between calls

pub mod failure;
pub mod fetch;
pub mod request;
pub mod transport;

pub use failure::ClientFailure;
pub use fetch::OutboundClient;
pub use request::{FetchBody, FetchOptions, HttpVerb};
pub use transport::Transport;
