//! # Songboard Common Library
//!
//! Shared code for the Songboard dashboard service including:
//! - Dataset store (CSV load + read-only accessors)
//! - Genre color registry
//! - Filter state and its update protocol
//! - Visualization derivations (word cloud, legend, correlation, scatter)
//! - Control-change dispatch table
//! - Configuration resolution and utility functions

pub mod colors;
pub mod config;
pub mod dataset;
pub mod dispatch;
pub mod error;
pub mod sse;
pub mod state;
pub mod viz;

pub use dataset::Dataset;
pub use error::{LoadError, ValidationError};
pub use state::{FilterState, FilterUpdate};
