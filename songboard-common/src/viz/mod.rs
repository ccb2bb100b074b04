//! Visualization derivations: pure functions from (dataset, filter state)
//! to render-ready artifacts.
//!
//! Rendering itself is the presentation layer's concern; everything here
//! emits data. None of these functions fail on an empty filtered subset —
//! each returns a well-defined degenerate artifact instead.

pub mod correlation;
pub mod legend;
pub mod scatter;
pub mod wordcloud;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use legend::{legend, LegendEntry};
pub use scatter::{scatter_points, ScatterPoint};
pub use wordcloud::{artist_color, corpus, normalize_artist};
