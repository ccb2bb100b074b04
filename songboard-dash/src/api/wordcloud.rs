//! Word-cloud artifact endpoint.
//!
//! Emits the corpus text plus a precomputed color for every distinct token
//! in it — the full set of words the layout algorithm can ask about — so
//! the browser-side renderer never needs a callback into the server.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use songboard_common::viz::wordcloud;

use crate::AppState;

/// Word-cloud input artifact
#[derive(Debug, Serialize)]
pub struct WordCloudResponse {
    /// Whitespace-normalized artist names, dataset order, space-joined
    pub corpus: String,
    /// Resolved color per distinct corpus token
    pub colors: BTreeMap<String, String>,
}

/// GET /api/wordcloud
///
/// Recomputed from the current year range and genre selection. An empty
/// filtered subset yields an empty corpus and an empty color table.
pub async fn get_wordcloud(State(state): State<AppState>) -> Json<WordCloudResponse> {
    let snapshot = state.snapshot().await;
    let filtered = state
        .dataset
        .rows_matching(snapshot.year_range, &snapshot.genres);

    let corpus = wordcloud::corpus(&filtered);
    let mut colors = BTreeMap::new();
    for token in corpus.split_whitespace() {
        if !colors.contains_key(token) {
            colors.insert(
                token.to_string(),
                wordcloud::artist_color(&filtered, &state.colors, token).to_string(),
            );
        }
    }

    Json(WordCloudResponse { corpus, colors })
}
