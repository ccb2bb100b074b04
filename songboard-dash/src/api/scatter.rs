//! Scatter dataset endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use songboard_common::viz::{scatter_points, ScatterPoint};
use songboard_common::ValidationError;

use crate::AppState;

/// Scatter artifact: axis names plus one record per filtered row
#[derive(Debug, Serialize)]
pub struct ScatterResponse {
    pub x_column: String,
    pub y_column: String,
    pub points: Vec<ScatterPoint>,
}

/// GET /api/scatter
///
/// Records for the rows inside the current year range, in dataset order,
/// with title/artist/year carried along for hover display. Missing cells
/// come through as `null`.
pub async fn get_scatter(
    State(state): State<AppState>,
) -> Result<Json<ScatterResponse>, ScatterError> {
    let snapshot = state.snapshot().await;
    let points = scatter_points(
        &state.dataset,
        snapshot.year_range,
        &snapshot.x_column,
        &snapshot.y_column,
    )?;

    Ok(Json(ScatterResponse {
        x_column: snapshot.x_column.clone(),
        y_column: snapshot.y_column.clone(),
        points,
    }))
}

/// Scatter endpoint errors
///
/// The filter state only holds validated columns, so this firing means a
/// bug upstream rather than bad user input; it is still reported.
#[derive(Debug)]
pub enum ScatterError {
    Validation(ValidationError),
}

impl From<ValidationError> for ScatterError {
    fn from(err: ValidationError) -> Self {
        ScatterError::Validation(err)
    }
}

impl IntoResponse for ScatterError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ScatterError::Validation(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
