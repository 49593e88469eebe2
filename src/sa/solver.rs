//! Instance-level entry point: random start, distance source, annealing.

use super::{AnnealingConfig, AnnealingResult, AnnealingRunner};
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::models::{Instance, Tour};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

/// Largest instance for which distances are precomputed into a
/// [`DistanceMatrix`]. Larger instances compute distances on demand.
pub const MATRIX_LIMIT: usize = 2000;

/// A solved instance.
#[derive(Debug, Clone)]
pub struct TspSolution {
    /// External point identifiers in visiting order.
    pub visit_ids: Vec<usize>,

    /// The annealing run that produced the tour.
    pub run: AnnealingResult,
}

impl TspSolution {
    /// Length of the closed tour.
    pub fn length(&self) -> f64 {
        self.run.best_length
    }

    /// Length of the random starting tour.
    pub fn initial_length(&self) -> f64 {
        self.run.initial_length
    }
}

/// Solves `instance` from a uniformly shuffled starting tour.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Point};
/// use u_tsp::sa::{solve, AnnealingConfig};
///
/// let instance = Instance::new(vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 10.0, 0.0),
///     Point::new(3, 10.0, 10.0),
///     Point::new(4, 0.0, 10.0),
/// ]);
/// let config = AnnealingConfig::default().with_seed(7);
/// let solution = solve(&instance, &config, &mut config.rng()).unwrap();
/// assert!((solution.length() - 40.0).abs() < 1e-6);
/// assert_eq!(solution.visit_ids.len(), 4);
/// ```
pub fn solve<R: Rng>(
    instance: &Instance,
    config: &AnnealingConfig,
    rng: &mut R,
) -> Result<TspSolution, TspError> {
    solve_with_cancel(instance, config, rng, None)
}

/// [`solve`] with an optional cancellation token.
pub fn solve_with_cancel<R: Rng>(
    instance: &Instance,
    config: &AnnealingConfig,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<TspSolution, TspError> {
    config.validate()?;
    let start = Tour::shuffled(instance.len(), rng);

    let run = if instance.len() <= MATRIX_LIMIT {
        debug!(n = instance.len(), "precomputing distance matrix");
        let matrix = DistanceMatrix::from_points(instance.points());
        AnnealingRunner::run_with_cancel(&matrix, start, config, rng, cancel)?
    } else {
        AnnealingRunner::run_with_cancel(instance, start, config, rng, cancel)?
    };

    Ok(TspSolution {
        visit_ids: instance.external_ids(run.best.order()),
        run,
    })
}
