//! Genre legend endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use songboard_common::viz::{legend, LegendEntry};

use crate::AppState;

/// Ordered legend entries, one per color registry row
#[derive(Debug, Serialize)]
pub struct LegendResponse {
    pub entries: Vec<LegendEntry>,
}

/// GET /api/legend
///
/// A function of the color registry only; the client re-fetches it whenever
/// the word cloud refreshes, but the payload never changes for the process.
pub async fn get_legend(State(state): State<AppState>) -> Json<LegendResponse> {
    Json(LegendResponse {
        entries: legend(&state.colors),
    })
}
