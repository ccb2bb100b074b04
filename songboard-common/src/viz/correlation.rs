//! Correlation derivation: pairwise Pearson matrix over the feature columns
//! of the year-filtered subset.
//!
//! Axis order is the dataset's available-column order on both axes, so the
//! renderer can label cells straight from `columns`. Cells that cannot be
//! computed (zero variance, too few paired observations) are `NaN`; the
//! renderer must tolerate them. `serde_json` writes `NaN` as `null`.

use serde::Serialize;

use crate::dataset::{Dataset, Row};

/// Square matrix indexed by `columns` on both axes.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Pearson correlation over rows where both cells are present.
///
/// `NaN` when fewer than two paired observations exist or either column has
/// zero variance within the pairs.
fn pearson(rows: &[&Row], a: usize, b: usize) -> f64 {
    let mut n = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;

    for row in rows {
        let (Some(x), Some(y)) = (row.feature(a), row.feature(b)) else {
            continue;
        };
        n += 1.0;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    if n < 2.0 {
        return f64::NAN;
    }
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Correlation matrix for the rows inside `year_range`.
///
/// A non-empty subset gets a 1.0 diagonal by construction, zero-variance
/// columns included. An empty subset yields an all-`NaN` matrix.
pub fn correlation_matrix(dataset: &Dataset, year_range: (i32, i32)) -> CorrelationMatrix {
    let columns = dataset.available_columns().to_vec();
    let size = columns.len();
    let rows = dataset.rows_in_years(year_range);

    let mut matrix = vec![vec![f64::NAN; size]; size];
    if !rows.is_empty() {
        for i in 0..size {
            matrix[i][i] = 1.0;
            for j in (i + 1)..size {
                let r = pearson(&rows, i, j);
                matrix[i][j] = r;
                matrix[j][i] = r;
            }
        }
    }

    CorrelationMatrix { columns, matrix }
}
