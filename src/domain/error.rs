use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Prediction error: {message}")]
    Prediction { message: String },

    #[error("Startup error: {message}")]
    Startup { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    pub fn startup(message: impl Into<String>) -> Self {
        Self::Startup {
            message: message.into(),
        }
    }

    /// The bare message, without the kind prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Prediction { message }
            | Self::Startup { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Text is required");
        assert_eq!(error.to_string(), "Validation error: Text is required");
        assert_eq!(error.message(), "Text is required");
    }

    #[test]
    fn test_prediction_error_keeps_raw_message() {
        let error = DomainError::prediction("ONNX session failed");
        assert_eq!(error.to_string(), "Prediction error: ONNX session failed");
        assert_eq!(error.message(), "ONNX session failed");
    }

    #[test]
    fn test_startup_error() {
        let error = DomainError::startup("model file missing");
        assert_eq!(error.to_string(), "Startup error: model file missing");
    }
}
