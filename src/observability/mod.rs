//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Events are emitted through the `tracing` dispatcher; with no subscriber
//!   installed (tests, embedding) logging is a no-op
//! - Metric calls without an installed recorder are no-ops as well

pub mod logging;
pub mod metrics;
