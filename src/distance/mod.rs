//! Distances and closed-tour length.
//!
//! Provides a dense distance matrix and the tour-length evaluation used by
//! the annealer and the reporter.

mod length;
mod matrix;

pub use length::{euclidean, tour_length};
pub use matrix::DistanceMatrix;
