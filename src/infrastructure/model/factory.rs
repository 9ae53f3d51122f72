//! Recognizer construction from configuration

use std::sync::Arc;

use crate::config::ModelConfig;
use crate::domain::{DomainError, EntityRecognizer};

/// Load the configured recognizer. Called once at startup; failure is fatal.
#[cfg(feature = "gliner")]
pub fn create_recognizer(config: &ModelConfig) -> Result<Arc<dyn EntityRecognizer>, DomainError> {
    let recognizer = super::gliner_onnx::GlinerRecognizer::load(config)?;
    tracing::info!(model = %config.id, "Model loaded");

    Ok(Arc::new(recognizer))
}

/// Load the configured recognizer. Called once at startup; failure is fatal.
#[cfg(not(feature = "gliner"))]
pub fn create_recognizer(config: &ModelConfig) -> Result<Arc<dyn EntityRecognizer>, DomainError> {
    Err(DomainError::startup(format!(
        "Cannot load model '{}': built without the `gliner` feature",
        config.id
    )))
}
