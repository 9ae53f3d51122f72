//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use metrics::{counter, describe_counter, describe_histogram, gauge, histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

use super::config::MetricsConfig;

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";
pub const PREDICTION_ERRORS_TOTAL: &str = "prediction_errors_total";
pub const SERVICE_INFO: &str = "ner_service_info";

/// Content type of the Prometheus text exposition format
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Prometheus recorder owned by the application rather than installed globally.
///
/// Every instance keeps its own registry, so independently built routers never
/// share counts.
#[derive(Clone)]
pub struct PrometheusMetrics {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
    path: String,
}

impl PrometheusMetrics {
    /// Build a recorder with the configured latency buckets
    pub fn new(config: &MetricsConfig, model_id: &str) -> anyhow::Result<Self> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(HTTP_REQUEST_DURATION.to_string()),
                &config.latency_buckets,
            )?
            .build_recorder();
        let handle = recorder.handle();

        let metrics = Self {
            recorder: Arc::new(recorder),
            handle,
            path: config.path.clone(),
        };
        metrics.register_default_metrics(model_id);

        Ok(metrics)
    }

    /// Get the metrics as a string for the scrape endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Path the scrape endpoint is served on
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Record one finished HTTP request
    pub fn record_http_request(&self, method: &str, endpoint: &str, status: u16, duration: Duration) {
        let labels = [
            ("method", method.to_string()),
            ("endpoint", endpoint.to_string()),
            ("status", status.to_string()),
        ];

        metrics::with_local_recorder(self.recorder.as_ref(), || {
            counter!(HTTP_REQUESTS_TOTAL, &labels).increment(1);
            histogram!(HTTP_REQUEST_DURATION, "endpoint" => endpoint.to_string())
                .record(duration.as_secs_f64());
        });
    }

    /// Record a failed model invocation
    pub fn record_prediction_error(&self) {
        metrics::with_local_recorder(self.recorder.as_ref(), || {
            counter!(PREDICTION_ERRORS_TOTAL).increment(1);
        });
    }

    fn register_default_metrics(&self, model_id: &str) {
        metrics::with_local_recorder(self.recorder.as_ref(), || {
            describe_counter!(HTTP_REQUESTS_TOTAL, "Total HTTP requests by method, endpoint and status");
            describe_histogram!(
                HTTP_REQUEST_DURATION,
                Unit::Seconds,
                "HTTP request latency by endpoint"
            );
            describe_counter!(PREDICTION_ERRORS_TOTAL, "Total failed model invocations");

            gauge!(
                SERVICE_INFO,
                "version" => env!("CARGO_PKG_VERSION"),
                "model" => model_id.to_string()
            )
            .set(1.0);
            // Exported at zero before the first failure
            counter!(PREDICTION_ERRORS_TOTAL).increment(0);
        });
    }
}

/// Initialize Prometheus metrics; `None` when disabled.
///
/// An invalid metrics configuration is an error rather than silently
/// serving without metrics.
pub fn init_metrics(
    config: &MetricsConfig,
    model_id: &str,
) -> anyhow::Result<Option<PrometheusMetrics>> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return Ok(None);
    }

    let metrics = PrometheusMetrics::new(config, model_id)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Prometheus metrics: {e}"))?;
    tracing::info!("Prometheus metrics initialized at {}", config.path);

    Ok(Some(metrics))
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    let path = metrics.path().to_string();

    Router::new()
        .route(&path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        metrics.render(),
    )
}
