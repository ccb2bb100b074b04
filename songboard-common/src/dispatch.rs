//! Control-change dispatch: a fixed table mapping each user control to the
//! derivations it invalidates.
//!
//! The genre legend has no data dependency on any control; it rides along
//! whenever the word cloud recomputes, so it appears in every fan-out that
//! contains the word cloud.

use serde::{Deserialize, Serialize};

use crate::state::FilterUpdate;

/// A user-facing control whose value just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    YearRange,
    Genres,
    XAxis,
    YAxis,
}

/// A recomputable output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Derivation {
    #[serde(rename = "wordcloud")]
    WordCloud,
    #[serde(rename = "legend")]
    GenreLegend,
    Heatmap,
    Scatter,
}

/// Canonical emission order for refresh lists.
pub const ALL_DERIVATIONS: [Derivation; 4] = [
    Derivation::WordCloud,
    Derivation::GenreLegend,
    Derivation::Heatmap,
    Derivation::Scatter,
];

/// Derivations invalidated by a single control change.
pub fn invalidated_by(control: Control) -> &'static [Derivation] {
    match control {
        Control::YearRange => &[
            Derivation::WordCloud,
            Derivation::GenreLegend,
            Derivation::Heatmap,
            Derivation::Scatter,
        ],
        Control::Genres => &[Derivation::WordCloud, Derivation::GenreLegend],
        Control::XAxis | Control::YAxis => &[Derivation::Scatter],
    }
}

/// Controls carried by a partial update.
pub fn controls_in(update: &FilterUpdate) -> Vec<Control> {
    let mut controls = Vec::new();
    if update.year_range.is_some() {
        controls.push(Control::YearRange);
    }
    if update.genres.is_some() {
        controls.push(Control::Genres);
    }
    if update.x_column.is_some() {
        controls.push(Control::XAxis);
    }
    if update.y_column.is_some() {
        controls.push(Control::YAxis);
    }
    controls
}

/// Union of fan-outs for every control in the update, in canonical order.
pub fn refresh_for(update: &FilterUpdate) -> Vec<Derivation> {
    let controls = controls_in(update);
    ALL_DERIVATIONS
        .into_iter()
        .filter(|d| {
            controls
                .iter()
                .any(|&c| invalidated_by(c).contains(d))
        })
        .collect()
}
