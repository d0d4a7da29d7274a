//! HTTP API Layer
//!
//! This crate exposes the depreciation engine over HTTP using Axum, so
//! presentation layers can value assets without linking the engine.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for valuation, schedules, and health
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(DepreciationEngine::system());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_asset::DepreciationEngine;

use crate::handlers::{depreciation, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: DepreciationEngine,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `engine` - Depreciation engine, carrying the clock used for "now"
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(engine: DepreciationEngine) -> Router {
    let state = AppState { engine };

    let depreciation_routes = Router::new()
        .route("/", post(depreciation::value_asset))
        .route("/schedule", post(depreciation::project_schedule))
        .route("/methods", get(depreciation::list_methods));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/depreciation", depreciation_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
