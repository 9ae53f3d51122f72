//! Zero-shot named entity recognition service
//!
//! Serves a pretrained GLiNER model over HTTP:
//! - `POST /predict` groups recognized entities by label
//! - `GET /metrics` exposes request, latency and error metrics
//! - configuration from files and `APP__*` environment variables

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::{model::create_recognizer, observability::init_metrics, services::PredictionService};
use tracing::info;

/// Create the application state: load the model and build the metrics registry.
///
/// Runs once before serving; a model that fails to load or an invalid metrics
/// configuration is fatal.
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let metrics = init_metrics(&config.observability.metrics, &config.model.id)?;

    let recognizer = create_recognizer(&config.model)?;
    let prediction_service = PredictionService::new(recognizer, config.model.id.clone());
    info!(model = %config.model.id, "Prediction service ready");

    Ok(AppState::new(std::sync::Arc::new(prediction_service)).with_metrics(metrics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_metrics_config_fails_startup() {
        let mut config = AppConfig::default();
        config.observability.metrics.latency_buckets = Vec::new();

        let Err(err) = create_app_state_with_config(&config) else {
            panic!("invalid latency buckets were accepted");
        };

        assert!(err.to_string().contains("Prometheus metrics"));
    }
}
