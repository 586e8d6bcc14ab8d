//! Logs, traces and metrics for the HTTP server.
//!
//! [`Observability::init`] installs the subscriber once at startup and
//! [`request_logging`] wraps every request in a span.

mod init;
mod logging;
mod metrics;
mod otel;
mod request;
mod settings;

pub(crate) use init::{Observability, ObservabilityError};
pub(crate) use metrics::{metrics_handler, record_order_placed};
pub(crate) use request::request_logging;
