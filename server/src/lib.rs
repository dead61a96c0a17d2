//! Job board server
//!
//! Renders JobTech search results as an HTML page and keeps the board's view
//! state (query, postings, in-flight flag) in one `SearchController`.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use jobtech::JobSource;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use crate::config::PageSettings;
use crate::controller::SearchController;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub controller: SearchController,
    pub source: Arc<dyn JobSource>,
    pub page: Arc<PageSettings>,
}

impl AppState {
    pub fn new(source: Arc<dyn JobSource>, page: PageSettings) -> Self {
        Self {
            controller: SearchController::new(source.clone()),
            source,
            page: Arc::new(page),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::board))
        .route("/search", post(routes::submit_search))
        .route("/api/state", get(routes::view_state))
        .route("/api/jobs", get(routes::search_jobs))
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
