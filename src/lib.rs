//! # u-tsp
//!
//! Euclidean traveling-salesman solver built on simulated annealing over
//! 2-opt segment reversals.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Instance, Tour, TspProblem trait)
//! - [`distance`] — Euclidean distance, distance matrix, closed-tour length
//! - [`local_search`] — Segment-reversal move with incremental delta
//! - [`sa`] — Annealing configuration, runner, and instance-level `solve`
//! - [`io`] — TSPLIB loader, reference-solution table, dataset listing
//! - [`report`] — Text and JSON result report
//! - [`error`] — Error type

pub mod distance;
pub mod error;
pub mod io;
pub mod local_search;
pub mod models;
pub mod report;
pub mod sa;

pub use error::TspError;
