//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (middleware: request ID, trace, body limit, metrics)
//!     → extract.rs (JSON or form body, lenient)
//!     → math.rs  → Operation::compute → 200 message | 400 error body
//!     → posts.rs → OutboundClient::fetch → relay.rs → 200 body | 500 error body
//! ```

pub mod extract;
pub mod math;
pub mod posts;
pub mod relay;
pub mod server;

pub use relay::{relay, RelayPolicy};
pub use server::{AppState, GatewayServer, ServerError};
