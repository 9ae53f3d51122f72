//! Infrastructure layer - model backends, services and observability

pub mod model;
pub mod observability;
pub mod services;
