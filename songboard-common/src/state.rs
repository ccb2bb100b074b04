//! Filter state: the current values of the three user-controlled inputs.
//!
//! There is a single authoritative state. Updates validate against dataset
//! bounds and produce a fresh state; the previous one is never mutated, so
//! in-flight recomputations keep reading a consistent snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::ValidationError;

/// Fully-defined control values. There is no partial or loading state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    /// Inclusive year range, within the dataset's year bounds.
    pub year_range: (i32, i32),
    /// Selected genres; a subset of the genre universe. May be empty.
    pub genres: BTreeSet<String>,
    /// Scatter x axis; a member of the available columns.
    pub x_column: String,
    /// Scatter y axis; a member of the available columns.
    pub y_column: String,
}

/// Partial update from a control change. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterUpdate {
    pub year_range: Option<(i32, i32)>,
    pub genres: Option<Vec<String>>,
    pub x_column: Option<String>,
    pub y_column: Option<String>,
}

impl FilterState {
    /// Initial state: full year range, all genres, first two feature columns.
    pub fn defaults(dataset: &Dataset) -> Self {
        let columns = dataset.available_columns();
        Self {
            year_range: dataset.year_bounds(),
            genres: dataset.genre_universe().iter().cloned().collect(),
            x_column: columns[0].clone(),
            y_column: columns[1].clone(),
        }
    }

    /// Validate an update against the dataset and return the next state.
    ///
    /// Year values outside the dataset bounds are clamped (and reordered if
    /// inverted) rather than rejected; genres outside the universe are
    /// silently dropped; an unknown column is a hard error.
    pub fn apply(
        &self,
        update: FilterUpdate,
        dataset: &Dataset,
    ) -> Result<FilterState, ValidationError> {
        let mut next = self.clone();

        if let Some((lo, hi)) = update.year_range {
            let (min_year, max_year) = dataset.year_bounds();
            let lo = lo.clamp(min_year, max_year);
            let hi = hi.clamp(min_year, max_year);
            next.year_range = if lo <= hi { (lo, hi) } else { (hi, lo) };
        }

        if let Some(genres) = update.genres {
            let universe = dataset.genre_universe();
            let (kept, dropped): (Vec<String>, Vec<String>) = genres
                .into_iter()
                .partition(|g| universe.contains(g));
            if !dropped.is_empty() {
                debug!("Dropping genres outside the dataset: {:?}", dropped);
            }
            next.genres = kept.into_iter().collect();
        }

        if let Some(column) = update.x_column {
            if dataset.column_index(&column).is_none() {
                return Err(ValidationError::UnknownColumn(column));
            }
            next.x_column = column;
        }

        if let Some(column) = update.y_column {
            if dataset.column_index(&column).is_none() {
                return Err(ValidationError::UnknownColumn(column));
            }
            next.y_column = column;
        }

        Ok(next)
    }
}
