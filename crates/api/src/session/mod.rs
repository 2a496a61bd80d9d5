//! Per-connection search sessions.
//!
//! A [`Session`] owns one browser's [`ScreenState`]. Raw keystrokes go
//! through a [`Debouncer`]; every settled query that differs from the last
//! one moves the screen to `Loading` and spawns a catalog fetch. Fetch
//! outcomes come back over a channel and are applied in arrival order, so
//! there is no request sequencing: a slow early response can overwrite a
//! later one. Each state change is published as a snapshot on the render
//! channel.
//!
//! On start the session loads the trending list once and searches the empty
//! query (the popular list). Dropping the session cancels the debouncer and
//! the loop; fetches already in flight finish but their outcomes are
//! discarded.

pub mod screen;
pub mod search;

use std::sync::Arc;
use std::time::Duration;

use cinetrend_catalog::MovieCatalog;
use cinetrend_core::debounce::Debouncer;
use cinetrend_core::error::FetchError;
use cinetrend_core::trending::DEFAULT_TRENDING_LIMIT;
use cinetrend_core::types::{Movie, TrendCounter};
use cinetrend_store::TrendStore;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub use screen::{ScreenState, Status};

/// Collaborators a session needs.
#[derive(Clone)]
pub struct SessionDeps {
    pub catalog: Arc<dyn MovieCatalog>,
    pub trends: TrendStore,
    pub debounce: Duration,
}

/// Result of a background task, applied by the session loop.
#[derive(Debug)]
enum Outcome {
    Search {
        query: String,
        result: Result<Vec<Movie>, FetchError>,
    },
    Trending(Vec<TrendCounter>),
}

/// Handle to a running session.
pub struct Session {
    debouncer: Debouncer<String>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl Session {
    /// Start a session; screen snapshots are sent on `renders`.
    pub fn start(deps: SessionDeps, renders: mpsc::UnboundedSender<ScreenState>) -> Self {
        let (debouncer, settled) = Debouncer::spawn(deps.debounce);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run(deps, settled, renders, cancel.clone()));

        Self {
            debouncer,
            cancel,
            task: Some(task),
        }
    }

    /// Feed the current contents of the search box.
    pub fn input(&self, query: String) {
        self.debouncer.push(query);
    }

    /// Stop the session and wait for its loop to exit.
    pub async fn shutdown(mut self) {
        self.debouncer.cancel();
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(
    deps: SessionDeps,
    mut settled: mpsc::UnboundedReceiver<String>,
    renders: mpsc::UnboundedSender<ScreenState>,
    cancel: CancellationToken,
) {
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut screen = ScreenState::default();

    spawn_trending(&deps, outcome_tx.clone());

    // The settled value starts out empty, which loads the popular list.
    let mut last_query = String::new();
    screen.begin_search(&last_query);
    let _ = renders.send(screen.clone());
    spawn_search(&deps, last_query.clone(), outcome_tx.clone());

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            next = settled.recv() => {
                let Some(query) = next else { break };
                if query == last_query {
                    continue;
                }
                tracing::debug!(query = %query, "Query settled");
                last_query.clone_from(&query);
                screen.begin_search(&query);
                spawn_search(&deps, query, outcome_tx.clone());
            }
            Some(outcome) = outcome_rx.recv() => match outcome {
                Outcome::Search { query, result } => {
                    if query != screen.query {
                        tracing::debug!(query = %query, current = %screen.query, "Applying outcome of superseded query");
                    }
                    screen.finish_search(result);
                }
                Outcome::Trending(trending) => screen.set_trending(trending),
            },
        }

        if renders.send(screen.clone()).is_err() {
            break;
        }
    }

    tracing::debug!("Search session stopped");
}

fn spawn_search(deps: &SessionDeps, query: String, outcomes: mpsc::UnboundedSender<Outcome>) {
    let catalog = Arc::clone(&deps.catalog);
    let trends = deps.trends.clone();
    tokio::spawn(async move {
        let result = search::run_search(catalog.as_ref(), &trends, &query).await;
        // The session may already be gone.
        let _ = outcomes.send(Outcome::Search { query, result });
    });
}

fn spawn_trending(deps: &SessionDeps, outcomes: mpsc::UnboundedSender<Outcome>) {
    let trends = deps.trends.clone();
    tokio::spawn(async move {
        let trending = trends.top_trending(DEFAULT_TRENDING_LIMIT).await;
        let _ = outcomes.send(Outcome::Trending(trending));
    });
}
