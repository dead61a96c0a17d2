use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use common::JobPosting;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::form_urlencoded;

use crate::{AppState, error::Result, render, state::ViewState};

/// Query parameters for the board and the JSON search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Body of the search form
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// One-off search result returned by `/api/jobs`
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<JobPosting>,
}

/// Handler for GET /?q=<keywords>
///
/// A query that differs from the board's current one (or the very first
/// visit) triggers a search before rendering.
pub async fn board(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = match params.q {
        Some(q) => q,
        None => state.controller.snapshot().await.query,
    };

    state.controller.update_query(&query).await;

    let snapshot = state.controller.snapshot().await;
    Html(render::page(&snapshot, &state.page).into_string())
}

/// Handler for POST /search
pub async fn submit_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Redirect {
    state.controller.submit(&form.q).await;

    let location = form_urlencoded::Serializer::new(String::from("/?"))
        .append_pair("q", &form.q)
        .finish();
    Redirect::to(&location)
}

/// Handler for GET /api/state
pub async fn view_state(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.controller.snapshot().await)
}

/// Handler for GET /api/jobs?q=<keywords>
///
/// Leaves the board untouched and reports fetch errors instead of hiding
/// them behind an empty list.
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let query = params.q.unwrap_or_default();
    let results = state.source.search(&query).await?;

    Ok(Json(SearchResponse {
        query,
        total_results: results.len(),
        results,
    }))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
