//! Correlation matrix endpoint.

use axum::{extract::State, Json};

use songboard_common::viz::{correlation_matrix, CorrelationMatrix};

use crate::AppState;

/// GET /api/correlation
///
/// Pairwise Pearson matrix over the feature columns of the year-filtered
/// rows, with `columns` giving the axis order for both dimensions. Cells
/// that cannot be computed are `NaN`, which serializes as `null`; the
/// heatmap renderer paints those as missing.
pub async fn get_correlation(State(state): State<AppState>) -> Json<CorrelationMatrix> {
    let snapshot = state.snapshot().await;
    Json(correlation_matrix(&state.dataset, snapshot.year_range))
}
