//! Domain layer - entities, grouping and the recognizer seam

pub mod entity;
pub mod error;
pub mod labels;
pub mod recognizer;

pub use entity::{Entity, PredictionResult};
pub use error::DomainError;
pub use labels::parse_labels;
pub use recognizer::EntityRecognizer;

#[cfg(test)]
pub use recognizer::{stub::StubRecognizer, MockEntityRecognizer};
