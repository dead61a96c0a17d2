//! Board view state and its transitions.
//!
//! All mutation goes through [`reduce`]; the controller only decides which
//! event to feed it.

use common::JobPosting;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub query: String,
    pub postings: Vec<JobPosting>,
    pub in_flight: bool,
    /// Token of the most recently issued search, 0 before the first one.
    pub latest_token: u64,
}

impl ViewState {
    pub fn has_searched(&self) -> bool {
        self.latest_token > 0
    }

    pub fn next_token(&self) -> u64 {
        self.latest_token + 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    QueryChanged(String),
    SearchStarted { token: u64 },
    SearchSucceeded { token: u64, postings: Vec<JobPosting> },
    SearchFailed { token: u64 },
}

/// Applies one event. Completions carrying anything but the latest token
/// leave the state untouched.
pub fn reduce(state: ViewState, event: Event) -> ViewState {
    match event {
        Event::QueryChanged(query) => ViewState { query, ..state },
        Event::SearchStarted { token } => ViewState {
            in_flight: true,
            latest_token: token.max(state.latest_token),
            ..state
        },
        Event::SearchSucceeded { token, postings } if token == state.latest_token => ViewState {
            postings,
            in_flight: false,
            ..state
        },
        Event::SearchFailed { token } if token == state.latest_token => ViewState {
            postings: Vec::new(),
            in_flight: false,
            ..state
        },
        Event::SearchSucceeded { .. } | Event::SearchFailed { .. } => state,
    }
}
