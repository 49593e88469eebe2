//! Simulated annealing for the Euclidean TSP.
//!
//! A single-solution trajectory search over 2-opt segment reversals. Worse
//! tours are accepted with probability `exp(-delta / T)`, where the
//! temperature `T` decays geometrically every move, so the search can leave
//! local optima early and settles as it cools. The best tour seen is kept
//! throughout.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod solver;

pub use config::{AnnealingConfig, DeltaStrategy};
pub use runner::{AnnealingResult, AnnealingRunner};
pub use solver::{solve, solve_with_cancel, TspSolution, MATRIX_LIMIT};
