//! GLiNER span-mode recognizer backed by ONNX runtime (gline-rs)

use std::path::Path;
use std::sync::Mutex;

use gliner::model::input::text::TextInput;
use gliner::model::params::Parameters;
use gliner::model::pipeline::span::SpanMode;
use gliner::model::GLiNER;
use orp::params::RuntimeParameters;
use tracing::info;

use crate::config::ModelConfig;
use crate::domain::{DomainError, Entity, EntityRecognizer};

/// Zero-shot recognizer over a local GLiNER ONNX export.
///
/// The inference session needs exclusive access, so calls are serialised
/// behind a mutex.
pub struct GlinerRecognizer {
    model: Mutex<GLiNER<SpanMode>>,
}

impl GlinerRecognizer {
    pub fn load(config: &ModelConfig) -> Result<Self, DomainError> {
        info!(
            model = %config.id,
            model_path = %config.model_path,
            tokenizer_path = %config.tokenizer_path,
            threshold = config.threshold,
            "Loading GLiNER model"
        );

        let params = Parameters::default().with_threshold(config.threshold);
        let model = GLiNER::<SpanMode>::new(
            params,
            RuntimeParameters::default(),
            Path::new(&config.tokenizer_path),
            Path::new(&config.model_path),
        )
        .map_err(|e| DomainError::startup(format!("Failed to load model '{}': {e}", config.id)))?;

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl EntityRecognizer for GlinerRecognizer {
    fn predict_entities(&self, text: &str, labels: &[String]) -> Result<Vec<Entity>, DomainError> {
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let input =
            TextInput::from_str(&[text], &labels).map_err(|e| DomainError::prediction(e.to_string()))?;

        let mut model = self
            .model
            .lock()
            .map_err(|e| DomainError::prediction(format!("Model lock poisoned: {e}")))?;

        let output = model
            .inference(input)
            .map_err(|e| DomainError::prediction(e.to_string()))?;

        let entities = output
            .spans
            .iter()
            .flat_map(|sequence| sequence.iter())
            .map(|span| Entity::new(span.class(), span.text()).with_score(span.probability()))
            .collect();

        Ok(entities)
    }
}
