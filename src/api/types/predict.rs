//! Prediction request and response bodies

use serde::Serialize;

use super::error::TEXT_REQUIRED;
use super::form::FormFields;
use crate::domain::{parse_labels, DomainError, PredictionResult};

/// Raw form fields of `POST /predict`
#[derive(Debug, Clone, Default)]
pub struct PredictForm {
    pub text: Option<String>,
    pub labels: Option<String>,
}

/// Validated prediction input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictInput {
    pub text: String,
    pub labels: Vec<String>,
}

impl From<FormFields> for PredictForm {
    fn from(fields: FormFields) -> Self {
        Self {
            text: fields.first("text").map(str::to_string),
            labels: fields.first("labels").map(str::to_string),
        }
    }
}

impl PredictForm {
    /// Require a non-empty `text` and split `labels` on commas
    pub fn into_input(self) -> Result<PredictInput, DomainError> {
        let text = match self.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(DomainError::validation(TEXT_REQUIRED)),
        };

        Ok(PredictInput {
            text,
            labels: parse_labels(self.labels.as_deref()),
        })
    }
}

/// Success body: `{"data": {<label>: [<spans>]}}`
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub data: PredictionResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    fn form(text: Option<&str>, labels: Option<&str>) -> PredictForm {
        PredictForm {
            text: text.map(str::to_string),
            labels: labels.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_text_is_rejected() {
        let err = form(None, Some("PERSON")).into_input().unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(err.message(), "Text is required");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let err = form(Some(""), None).into_input().unwrap_err();
        assert_eq!(err.message(), "Text is required");
    }

    #[test]
    fn test_whitespace_text_is_accepted() {
        let input = form(Some(" "), None).into_input().unwrap();
        assert_eq!(input.text, " ");
    }

    #[test]
    fn test_labels_are_split_literally() {
        let input = form(Some("hi"), Some("A, B")).into_input().unwrap();

        assert_eq!(input.labels, ["A", " B"]);
    }

    #[test]
    fn test_missing_labels_yield_empty_list() {
        let input = form(Some("hi"), None).into_input().unwrap();
        assert!(input.labels.is_empty());
    }

    #[test]
    fn test_repeated_fields_take_first_value() {
        let form = PredictForm::from(FormFields::parse(
            b"text=Alice&text=Bob&labels=PERSON&labels=LOCATION",
        ));
        let input = form.into_input().unwrap();

        assert_eq!(input.text, "Alice");
        assert_eq!(input.labels, ["PERSON"]);
    }

    #[test]
    fn test_response_serialization() {
        let response = PredictResponse {
            data: PredictionResult::group(vec![
                Entity::new("PERSON", "Alice"),
                Entity::new("PERSON", "Bob"),
                Entity::new("LOCATION", "Paris"),
            ]),
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"data":{"PERSON":["Alice","Bob"],"LOCATION":["Paris"]}}"#
        );
    }
}
