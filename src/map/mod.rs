//! Text map model
//!
//! This module contains:
//! - Row splitting, ASCII validation and shape inspection
//! - Feature symbol sets and tile counting

/// Feature symbol sets and counting
pub mod features;
/// Grid of text rows
pub mod grid;

pub use features::FeatureSet;
pub use grid::Grid;
