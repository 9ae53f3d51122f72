//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, PredictionResult};
use crate::infrastructure::observability::PrometheusMetrics;
use crate::infrastructure::services::PredictionService;

/// Application state shared by every handler.
///
/// Built once before the listener starts; holds the single loaded model and
/// the metrics registry.
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<dyn PredictionServiceTrait>,
    pub metrics: Option<PrometheusMetrics>,
}

impl AppState {
    pub fn new(prediction_service: Arc<dyn PredictionServiceTrait>) -> Self {
        Self {
            prediction_service,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Option<PrometheusMetrics>) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Trait for prediction service operations
#[async_trait::async_trait]
pub trait PredictionServiceTrait: Send + Sync {
    async fn predict(
        &self,
        text: String,
        labels: Vec<String>,
    ) -> Result<PredictionResult, DomainError>;

    fn model_id(&self) -> &str;
}

#[async_trait::async_trait]
impl PredictionServiceTrait for PredictionService {
    async fn predict(
        &self,
        text: String,
        labels: Vec<String>,
    ) -> Result<PredictionResult, DomainError> {
        PredictionService::predict(self, text, labels).await
    }

    fn model_id(&self) -> &str {
        PredictionService::model_id(self)
    }
}
