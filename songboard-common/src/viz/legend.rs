//! Genre legend derivation.
//!
//! A function of the color registry alone: filter state never changes it.
//! It is re-emitted whenever the word cloud recomputes, so callers treat it
//! as a derivation even though its output is static for the process.

use serde::Serialize;

use crate::colors::GenreColorMap;

/// One legend swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub genre: String,
    pub color: String,
}

/// Legend entries in registry order.
pub fn legend(colors: &GenreColorMap) -> Vec<LegendEntry> {
    colors
        .entries()
        .map(|(genre, color)| LegendEntry {
            genre: genre.to_string(),
            color: color.to_string(),
        })
        .collect()
}
