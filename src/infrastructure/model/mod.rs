//! Entity model adapters

mod factory;
#[cfg(feature = "gliner")]
mod gliner_onnx;

pub use factory::create_recognizer;
#[cfg(feature = "gliner")]
pub use gliner_onnx::GlinerRecognizer;
