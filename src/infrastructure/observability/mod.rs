//! Observability infrastructure - Tracing, Metrics, and Logging

mod config;
mod metrics;
mod tracing_setup;

pub use config::{MetricsConfig, ObservabilityConfig, TracingConfig};
pub use metrics::{
    create_metrics_router, init_metrics, PrometheusMetrics, EXPOSITION_CONTENT_TYPE,
    HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION, PREDICTION_ERRORS_TOTAL,
};
pub use tracing_setup::{init_tracing, shutdown_tracing};
