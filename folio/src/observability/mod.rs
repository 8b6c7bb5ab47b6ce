//! Observability
//!
//! Structured logging and Prometheus metrics for the CLI and HTTP host.

pub mod logging;
pub mod metrics;

pub use logging::{LogFormat, init_logging};
pub use metrics::init_metrics;
