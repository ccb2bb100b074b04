//! songboard-dash library - Top-songs analytics dashboard service
//!
//! Serves the interactive dashboard UI and the JSON artifacts behind it:
//! word cloud input, genre legend, correlation matrix, and scatter data,
//! all recomputed from the current filter selections on request.

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use songboard_common::colors::GenreColorMap;
use songboard_common::{Dataset, FilterState, FilterUpdate, ValidationError};

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The table, loaded once and read-only afterwards
    pub dataset: Arc<Dataset>,
    /// Genre → color registry threaded into the colored derivations
    pub colors: GenreColorMap,
    /// Authoritative filter state; replaced wholesale on every update
    filters: Arc<RwLock<Arc<FilterState>>>,
}

impl AppState {
    /// Create application state with default filter selections
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let defaults = FilterState::defaults(&dataset);
        Self {
            dataset,
            colors: GenreColorMap::builtin(),
            filters: Arc::new(RwLock::new(Arc::new(defaults))),
        }
    }

    /// One consistent snapshot of the current filter state.
    ///
    /// Recomputations hold the `Arc`, not the lock, so a concurrent update
    /// can never tear a derivation mid-read.
    pub async fn snapshot(&self) -> Arc<FilterState> {
        self.filters.read().await.clone()
    }

    /// Validate an update against the dataset and install the new state.
    pub async fn apply_update(
        &self,
        update: FilterUpdate,
    ) -> Result<Arc<FilterState>, ValidationError> {
        let mut guard = self.filters.write().await;
        let next = Arc::new(guard.apply(update, &self.dataset)?);
        *guard = next.clone();
        Ok(next)
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route(
            "/api/controls",
            get(api::get_controls).post(api::update_controls),
        )
        .route("/api/wordcloud", get(api::get_wordcloud))
        .route("/api/legend", get(api::get_legend))
        .route("/api/correlation", get(api::get_correlation))
        .route("/api/scatter", get(api::get_scatter))
        .route("/api/events", get(api::event_stream))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
