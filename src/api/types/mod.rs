//! Request and response types

pub mod error;
pub mod form;
pub mod predict;

pub use error::{ApiError, ApiErrorResponse};
pub use form::FormFields;
pub use predict::{PredictForm, PredictInput, PredictResponse};
