//! HTTP API handlers for songboard-dash

pub mod controls;
pub mod correlation;
pub mod health;
pub mod legend;
pub mod scatter;
pub mod sse;
pub mod ui;
pub mod wordcloud;

pub use controls::{get_controls, update_controls};
pub use correlation::get_correlation;
pub use health::health_routes;
pub use legend::get_legend;
pub use scatter::get_scatter;
pub use sse::event_stream;
pub use ui::{serve_app_js, serve_index};
pub use wordcloud::get_wordcloud;
