use super::{DomainError, Entity};

#[cfg(test)]
use mockall::automock;

/// Model that extracts labeled spans from text.
///
/// Implementations are loaded once and shared across requests. Calls may block
/// for the full duration of inference, so async callers should move them off
/// the executor.
#[cfg_attr(test, automock)]
pub trait EntityRecognizer: Send + Sync {
    /// Run the model over `text` for the given candidate labels.
    ///
    /// Labels are passed through unchanged, including an empty list.
    fn predict_entities(&self, text: &str, labels: &[String]) -> Result<Vec<Entity>, DomainError>;
}

#[cfg(test)]
pub mod stub {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Recognizer returning a canned answer, recording how often it ran
    #[derive(Debug, Default)]
    pub struct StubRecognizer {
        entities: Vec<Entity>,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl StubRecognizer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
            self.entities = entities;
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl EntityRecognizer for StubRecognizer {
        fn predict_entities(
            &self,
            _text: &str,
            _labels: &[String],
        ) -> Result<Vec<Entity>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::prediction(error));
            }

            Ok(self.entities.clone())
        }
    }
}
