//! Prediction endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, FormFields, PredictForm, PredictResponse};
use crate::domain::DomainError;

/// POST /predict
///
/// Form fields: `text` (required) and `labels` (optional, comma-separated).
/// A repeated field uses its first value.
pub async fn predict(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<Json<PredictResponse>, ApiError> {
    let input = PredictForm::from(fields).into_input()?;

    debug!(
        text_len = input.text.len(),
        labels = ?input.labels,
        "Predicting entities"
    );

    match state
        .prediction_service
        .predict(input.text, input.labels)
        .await
    {
        Ok(data) => Ok(Json(PredictResponse { data })),
        Err(err) => Err(prediction_failure(&state, err)),
    }
}

fn prediction_failure(state: &AppState, err: DomainError) -> ApiError {
    warn!(error = %err, "Prediction failed");

    if let Some(metrics) = &state.metrics {
        metrics.record_prediction_error();
    }

    ApiError::prediction_failed(err.message())
}
