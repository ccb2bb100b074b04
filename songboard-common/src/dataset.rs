//! Dataset store: loads the cleaned top-songs table once and serves
//! read-only views of it for the lifetime of the process.
//!
//! The table must carry `title`, `artist`, `top genre` and `year`; every
//! other column is treated as a numeric feature discovered at load time.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

/// Column names fixed by the input contract, in header order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["title", "artist", "top genre", "year"];

/// One song. Feature cells are kept in dataset column order; blank or
/// non-numeric cells load as `None` and are tolerated downstream.
#[derive(Debug, Clone)]
pub struct Row {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub year: i32,
    features: Vec<Option<f64>>,
}

impl Row {
    /// Feature value by index into `Dataset::available_columns()`.
    pub fn feature(&self, index: usize) -> Option<f64> {
        self.features.get(index).copied().flatten()
    }
}

/// The immutable in-memory table plus facts derived at load time.
#[derive(Debug)]
pub struct Dataset {
    rows: Vec<Row>,
    feature_columns: Vec<String>,
    genres: Vec<String>,
    year_bounds: (i32, i32),
}

impl Dataset {
    /// Load from a CSV file on disk.
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load from any CSV byte stream.
    ///
    /// Fails when a required column is missing, the CSV is malformed, a
    /// `year` cell does not parse, the table is empty, or fewer than two
    /// feature columns remain (axis defaults need an x and a y).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut required_indices = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in required_indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))?;
        }
        let [title_idx, artist_idx, genre_idx, year_idx] = required_indices;

        // Every non-required column is a feature column, header order preserved
        let feature_indices: Vec<usize> = (0..headers.len())
            .filter(|i| !required_indices.contains(i))
            .collect();
        let feature_columns: Vec<String> = feature_indices
            .iter()
            .map(|&i| headers[i].clone())
            .collect();
        if feature_columns.len() < 2 {
            return Err(LoadError::TooFewFeatureColumns(feature_columns.len()));
        }

        let mut rows = Vec::new();
        let mut genres = Vec::new();
        let mut seen_genres = BTreeSet::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for (row_number, record) in csv_reader.records().enumerate() {
            let record = record?;
            let cell = |i: usize| record.get(i).unwrap_or("");

            let year_cell = cell(year_idx);
            let year: i32 =
                year_cell
                    .trim()
                    .parse()
                    .map_err(|_| LoadError::UnparsableYear {
                        row: row_number + 1,
                        value: year_cell.to_string(),
                    })?;

            year_bounds = Some(match year_bounds {
                None => (year, year),
                Some((lo, hi)) => (lo.min(year), hi.max(year)),
            });

            let genre = cell(genre_idx).to_string();
            if seen_genres.insert(genre.clone()) {
                genres.push(genre.clone());
            }

            let features = feature_indices
                .iter()
                .map(|&i| cell(i).trim().parse::<f64>().ok())
                .collect();

            rows.push(Row {
                title: cell(title_idx).to_string(),
                artist: cell(artist_idx).to_string(),
                genre,
                year,
                features,
            });
        }

        // A present bound doubles as the non-empty check
        let Some(year_bounds) = year_bounds else {
            return Err(LoadError::Empty);
        };

        Ok(Self {
            rows,
            feature_columns,
            genres,
            year_bounds,
        })
    }

    /// All rows, in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Feature column names (everything except title/artist/top genre/year),
    /// in header order.
    pub fn available_columns(&self) -> &[String] {
        &self.feature_columns
    }

    /// Distinct `top genre` values, in first-appearance order.
    pub fn genre_universe(&self) -> &[String] {
        &self.genres
    }

    /// Inclusive (min, max) of the `year` column.
    pub fn year_bounds(&self) -> (i32, i32) {
        self.year_bounds
    }

    /// Index of a feature column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.feature_columns.iter().position(|c| c == name)
    }

    /// Rows with `year` inside the inclusive range, source order preserved.
    pub fn rows_in_years(&self, (lo, hi): (i32, i32)) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|r| r.year >= lo && r.year <= hi)
            .collect()
    }

    /// Rows inside the year range whose genre is in the selected set,
    /// source order preserved. An empty selection matches nothing.
    pub fn rows_matching(
        &self,
        year_range: (i32, i32),
        genres: &BTreeSet<String>,
    ) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|r| r.year >= year_range.0 && r.year <= year_range.1)
            .filter(|r| genres.contains(&r.genre))
            .collect()
    }
}
