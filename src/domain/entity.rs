use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A labeled span of text emitted by the recognizer
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub label: String,
    pub text: String,
    pub score: Option<f32>,
}

impl Entity {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Entities grouped by label.
///
/// Keys keep the order in which the model first emitted each label and the
/// spans under a key keep emission order. Labels without matches never appear.
/// Serializes as a JSON object in that same key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResult {
    groups: Vec<(String, Vec<String>)>,
}

impl PredictionResult {
    /// Group a flat entity list by label, one span per entity
    pub fn group(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut result = Self::default();

        for entity in entities {
            result.push(entity.label, entity.text);
        }

        result
    }

    fn push(&mut self, label: String, text: String) {
        match self.groups.iter_mut().find(|(key, _)| *key == label) {
            Some((_, spans)) => spans.push(text),
            None => self.groups.push((label, vec![text])),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, spans)| spans.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of spans across all labels
    pub fn span_count(&self) -> usize {
        self.groups.iter().map(|(_, spans)| spans.len()).sum()
    }
}

impl Serialize for PredictionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;

        for (label, spans) in &self.groups {
            map.serialize_entry(label, spans)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entities() -> Vec<Entity> {
        vec![
            Entity::new("PERSON", "Alice"),
            Entity::new("PERSON", "Bob"),
            Entity::new("LOCATION", "Paris"),
        ]
    }

    #[test]
    fn test_group_preserves_emission_order() {
        let result = PredictionResult::group(sample_entities());

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("PERSON").unwrap(), ["Alice", "Bob"]);
        assert_eq!(result.get("LOCATION").unwrap(), ["Paris"]);
        assert_eq!(result.labels().collect::<Vec<_>>(), ["PERSON", "LOCATION"]);
    }

    #[test]
    fn test_group_interleaved_labels() {
        let result = PredictionResult::group(vec![
            Entity::new("ORG", "Acme"),
            Entity::new("PERSON", "Alice"),
            Entity::new("ORG", "Globex"),
        ]);

        assert_eq!(result.labels().collect::<Vec<_>>(), ["ORG", "PERSON"]);
        assert_eq!(result.get("ORG").unwrap(), ["Acme", "Globex"]);
        assert_eq!(result.span_count(), 3);
    }

    #[test]
    fn test_group_keeps_duplicate_spans() {
        let result = PredictionResult::group(vec![
            Entity::new("PERSON", "Alice"),
            Entity::new("PERSON", "Alice"),
        ]);

        assert_eq!(result.get("PERSON").unwrap(), ["Alice", "Alice"]);
    }

    #[test]
    fn test_empty_result_has_no_keys() {
        let result = PredictionResult::group(Vec::new());

        assert!(result.is_empty());
        assert!(result.get("PERSON").is_none());
        assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let result = PredictionResult::group(sample_entities());
        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(json, r#"{"PERSON":["Alice","Bob"],"LOCATION":["Paris"]}"#);
    }

    #[test]
    fn test_entity_builders() {
        let entity = Entity::new("PERSON", "Alice").with_score(0.93);

        assert_eq!(entity.text, "Alice");
        assert_eq!(entity.score, Some(0.93));
    }
}
