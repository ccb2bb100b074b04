//! Scatter derivation: one record per year-filtered row, drawn directly
//! from the table with no aggregation or deduplication.
//!
//! Missing or non-numeric cells in the chosen columns pass through as
//! `None` (`null` on the wire); whether to drop or plot them is the
//! renderer's call.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::ValidationError;

/// One plotted point with its hover fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub title: String,
    pub artist: String,
    pub year: i32,
}

/// Records for the rows inside `year_range`, dataset order preserved.
///
/// The columns come from a validated filter state, so a lookup miss here is
/// a programming error upstream and is signaled, not ignored.
pub fn scatter_points(
    dataset: &Dataset,
    year_range: (i32, i32),
    x_column: &str,
    y_column: &str,
) -> Result<Vec<ScatterPoint>, ValidationError> {
    let x_index = dataset
        .column_index(x_column)
        .ok_or_else(|| ValidationError::UnknownColumn(x_column.to_string()))?;
    let y_index = dataset
        .column_index(y_column)
        .ok_or_else(|| ValidationError::UnknownColumn(y_column.to_string()))?;

    Ok(dataset
        .rows_in_years(year_range)
        .into_iter()
        .map(|row| ScatterPoint {
            x: row.feature(x_index),
            y: row.feature(y_index),
            title: row.title.clone(),
            artist: row.artist.clone(),
            year: row.year,
        })
        .collect())
}
