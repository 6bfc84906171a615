//! HTTP gateway
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Score a receipt, returns `{"id": ...}`
//! - GET /receipts/:id/points - Look up points, returns `{"points": ...}`

pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use server::*;
pub use state::*;

use axum::{
    routing::{get, post},
    Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .fallback(handlers::not_found)
        .with_state(state)
}
