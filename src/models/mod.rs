//! Domain model types for Euclidean TSP.
//!
//! Points with external identifiers, instances that own them, tours as
//! permutations of internal indices, and the problem trait that tour
//! evaluation and the annealer work against.

mod instance;
mod point;
mod problem;
mod tour;

pub use instance::{Instance, InstanceHeader};
pub use point::Point;
pub use problem::TspProblem;
pub use tour::Tour;
