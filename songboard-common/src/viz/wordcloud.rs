//! Word-cloud derivation: corpus text plus a per-word color resolver.
//!
//! The layout algorithm lives in the presentation layer; this module only
//! prepares its input. The resolver takes the filtered subset explicitly so
//! the same snapshot that produced the corpus answers the color queries.

use crate::colors::{GenreColorMap, SENTINEL_COLOR};
use crate::dataset::Row;

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn normalize_artist(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenated normalized artist names for the filtered rows, in dataset
/// order, joined by single spaces. Empty input yields an empty string.
pub fn corpus(filtered: &[&Row]) -> String {
    filtered
        .iter()
        .map(|row| normalize_artist(&row.artist))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Color for a word the renderer is about to draw.
///
/// Finds the first filtered row (dataset order) whose normalized artist
/// name equals the word exactly, then maps its genre through the color
/// registry. Both a missing row and an unmapped genre yield the sentinel,
/// so tokens of multi-word names quietly fall back to it.
pub fn artist_color(filtered: &[&Row], colors: &GenreColorMap, word: &str) -> &'static str {
    filtered
        .iter()
        .find(|row| normalize_artist(&row.artist) == word)
        .map(|row| colors.color_for(&row.genre))
        .unwrap_or(SENTINEL_COLOR)
}
