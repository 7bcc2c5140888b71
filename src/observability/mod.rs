//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP layer and project store produce:
//!     → logging.rs (structured log events, request-id spans)
//!     → metrics.rs (request counters, latency histogram, record gauge)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape, when enabled)
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the request-id layer into every span
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
