//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, LogFormat, LoggingConfig, ModelConfig, ServerConfig, DEFAULT_MODEL_ID,
};
