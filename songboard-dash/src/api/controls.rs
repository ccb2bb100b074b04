//! Filter control endpoints: read the current selections (plus the facts
//! the UI needs to build its widgets) and apply partial updates.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use songboard_common::dispatch::{self, Derivation};
use songboard_common::{FilterState, FilterUpdate, ValidationError};

use crate::AppState;

/// Options the UI offers for each control, all derived from the dataset
#[derive(Debug, Serialize)]
pub struct ControlOptions {
    pub year_bounds: (i32, i32),
    pub genres: Vec<String>,
    pub columns: Vec<String>,
}

/// Current state plus control options
#[derive(Debug, Serialize)]
pub struct ControlsResponse {
    pub state: FilterState,
    pub options: ControlOptions,
}

/// New state plus the derivations the client should re-fetch
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub state: FilterState,
    pub refresh: Vec<Derivation>,
}

/// GET /api/controls
///
/// Returns the current filter state and the option sets for every control:
/// slider bounds from the dataset years, the genre universe, and the
/// feature columns selectable as axes.
pub async fn get_controls(State(state): State<AppState>) -> Json<ControlsResponse> {
    let snapshot = state.snapshot().await;
    Json(ControlsResponse {
        state: (*snapshot).clone(),
        options: ControlOptions {
            year_bounds: state.dataset.year_bounds(),
            genres: state.dataset.genre_universe().to_vec(),
            columns: state.dataset.available_columns().to_vec(),
        },
    })
}

/// POST /api/controls
///
/// Applies a partial filter update and answers with the new state and the
/// refresh fan-out from the dispatch table. Years are clamped and unknown
/// genres dropped by the state layer; an unknown column is a 400.
pub async fn update_controls(
    State(state): State<AppState>,
    Json(update): Json<FilterUpdate>,
) -> Result<Json<UpdateResponse>, ControlsError> {
    let refresh = dispatch::refresh_for(&update);
    let next = state.apply_update(update).await?;
    Ok(Json(UpdateResponse {
        state: (*next).clone(),
        refresh,
    }))
}

/// Control update errors
#[derive(Debug)]
pub enum ControlsError {
    Validation(ValidationError),
}

impl From<ValidationError> for ControlsError {
    fn from(err: ValidationError) -> Self {
        ControlsError::Validation(err)
    }
}

impl IntoResponse for ControlsError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ControlsError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
