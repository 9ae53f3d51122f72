//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod index;
pub mod middleware;
pub mod predict;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_router, create_router_with_body_limit, DEFAULT_BODY_LIMIT};
pub use state::{AppState, PredictionServiceTrait};
