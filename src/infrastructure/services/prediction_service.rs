//! Prediction service - runs the recognizer and groups its output

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, EntityRecognizer, PredictionResult};

/// Single-model prediction pipeline shared by every request
#[derive(Clone)]
pub struct PredictionService {
    recognizer: Arc<dyn EntityRecognizer>,
    model_id: String,
}

impl PredictionService {
    /// Create a new PredictionService around a loaded recognizer
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, model_id: impl Into<String>) -> Self {
        Self {
            recognizer,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Predict entities and group them by label.
    ///
    /// Inference runs on the blocking pool; the whole call either succeeds
    /// or fails, there are no partial results.
    pub async fn predict(
        &self,
        text: String,
        labels: Vec<String>,
    ) -> Result<PredictionResult, DomainError> {
        let recognizer = Arc::clone(&self.recognizer);

        let entities =
            tokio::task::spawn_blocking(move || recognizer.predict_entities(&text, &labels))
                .await
                .map_err(|e| DomainError::prediction(format!("Prediction task failed: {e}")))??;

        let result = PredictionResult::group(entities);
        debug!(
            model = %self.model_id,
            labels = result.len(),
            spans = result.span_count(),
            "Prediction complete"
        );

        Ok(result)
    }
}
