//! HTTP gateway serving arithmetic endpoints and a relay to an upstream
//! posts API.

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod lifecycle;
pub mod math;
pub mod observability;

pub use client::{ClientFailure, OutboundClient};
pub use config::GatewayConfig;
pub use errors::{make_error, ErrorBody, ErrorCode};
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
