use std::sync::Arc;

use jobtech::JobSource;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::state::{Event, ViewState, reduce};

/// Owns the board's view state and runs searches against a [`JobSource`].
#[derive(Clone)]
pub struct SearchController {
    state: Arc<RwLock<ViewState>>,
    source: Arc<dyn JobSource>,
}

impl SearchController {
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ViewState::default())),
            source,
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    async fn dispatch(&self, event: Event) {
        let mut state = self.state.write().await;
        let current = std::mem::take(&mut *state);
        *state = reduce(current, event);
    }

    fn start(state: &mut ViewState) -> u64 {
        let token = state.next_token();
        let current = std::mem::take(state);
        *state = reduce(current, Event::SearchStarted { token });
        token
    }

    pub async fn set_query(&self, text: &str) {
        self.dispatch(Event::QueryChanged(text.to_string())).await;
    }

    /// Runs one search for `text`. Failures end up as an empty list; only
    /// the latest issued search may touch the postings.
    pub async fn search(&self, text: &str) {
        let token = Self::start(&mut *self.state.write().await);
        self.run(token, text).await;
    }

    /// Fetches on a detached task so the completion event is applied even
    /// when the caller's future is dropped.
    async fn run(&self, token: u64, text: &str) {
        info!(token, query = text, "Job search started");

        let task = tokio::spawn({
            let controller = self.clone();
            let query = text.to_string();
            async move { controller.complete(token, &query).await }
        });

        if let Err(e) = task.await {
            error!(token, query = text, error = %e, "Job search task aborted");
            self.dispatch(Event::SearchFailed { token }).await;
        }
    }

    async fn complete(&self, token: u64, text: &str) {
        let event = match self.source.search(text).await {
            Ok(postings) => {
                info!(token, query = text, hits = postings.len(), "Job search finished");
                Event::SearchSucceeded { token, postings }
            }
            Err(e) => {
                error!(token, query = text, error = %e, "Job search failed");
                Event::SearchFailed { token }
            }
        };

        let mut state = self.state.write().await;
        if state.latest_token != token {
            debug!(token, latest = state.latest_token, "Discarding superseded search result");
        }
        let current = std::mem::take(&mut *state);
        *state = reduce(current, event);
    }

    /// Query changed from the outside: search when it differs from the
    /// current one, or when nothing has been searched yet. Returns whether a
    /// search ran.
    pub async fn update_query(&self, text: &str) -> bool {
        let token = {
            let mut state = self.state.write().await;
            if state.query == text && state.has_searched() {
                return false;
            }
            let current = std::mem::take(&mut *state);
            *state = reduce(current, Event::QueryChanged(text.to_string()));
            Self::start(&mut state)
        };

        self.run(token, text).await;
        true
    }

    /// Explicit form submission: always searches, even for the same query.
    pub async fn submit(&self, text: &str) {
        self.set_query(text).await;
        self.search(text).await;
    }
}
