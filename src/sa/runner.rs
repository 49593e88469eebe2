//! Annealing loop.

use super::config::{AnnealingConfig, DeltaStrategy};
use crate::distance::tour_length;
use crate::error::TspError;
use crate::local_search::SegmentReversal;
use crate::models::{Tour, TspProblem};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Best length is sampled into the history every this many moves.
const HISTORY_INTERVAL: usize = 1000;

/// Tours on three or fewer points all share one edge set, so there is
/// nothing to search.
const TRIVIAL_SIZE: usize = 3;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// The best tour found.
    pub best: Tour,

    /// Length of the best tour, recomputed from scratch.
    pub best_length: f64,

    /// Length of the starting tour.
    pub initial_length: f64,

    /// Total number of moves evaluated.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best length sampled at regular intervals. Non-increasing.
    pub length_history: Vec<f64>,
}

/// Executes simulated annealing over 2-opt segment reversals.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Point, Tour};
/// use u_tsp::sa::{AnnealingConfig, AnnealingRunner};
///
/// let square = Instance::new(vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 10.0, 10.0),
///     Point::new(2, 10.0, 0.0),
///     Point::new(3, 0.0, 10.0),
/// ]);
/// let config = AnnealingConfig::default().with_seed(42);
/// let mut rng = config.rng();
/// let result = AnnealingRunner::run(&square, Tour::identity(4), &config, &mut rng).unwrap();
/// assert!((result.best_length - 40.0).abs() < 1e-6);
/// ```
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Anneals `initial` against `problem`, drawing every random number from
    /// `rng`.
    pub fn run<P, R>(
        problem: &P,
        initial: Tour,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<AnnealingResult, TspError>
    where
        P: TspProblem + ?Sized,
        R: Rng,
    {
        Self::run_with_cancel(problem, initial, config, rng, None)
    }

    /// Runs with an optional cancellation token, checked before every move.
    pub fn run_with_cancel<P, R>(
        problem: &P,
        initial: Tour,
        config: &AnnealingConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealingResult, TspError>
    where
        P: TspProblem + ?Sized,
        R: Rng,
    {
        config.validate()?;
        let n = initial.len();
        if n != problem.num_points() {
            return Err(TspError::TourMismatch {
                tour: n,
                points: problem.num_points(),
            });
        }

        let initial_length = tour_length(problem, initial.order());
        if n <= TRIVIAL_SIZE {
            debug!(n, length = initial_length, "trivial instance, skipping search");
            return Ok(AnnealingResult {
                best: initial,
                best_length: initial_length,
                initial_length,
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                cancelled: false,
                length_history: vec![initial_length],
            });
        }

        debug!(
            n,
            initial_length,
            initial_temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
            min_temperature = config.min_temperature,
            "annealing started"
        );

        let mut current = initial;
        let mut current_length = initial_length;
        let mut best = current.clone();
        let mut best_length = current_length;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut length_history = vec![best_length];

        while temperature > config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let Some(mv) = SegmentReversal::random(n, rng) else {
                break;
            };

            let candidate_length = match config.delta_strategy {
                DeltaStrategy::Incremental => {
                    let delta = mv.delta(problem, &current);
                    mv.apply(&mut current);
                    current_length + delta
                }
                DeltaStrategy::Recompute => {
                    mv.apply(&mut current);
                    tour_length(problem, current.order())
                }
            };
            let delta = candidate_length - current_length;

            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                accepts_uphill(delta, temperature, rng.random_range(0.0..1.0))
            };

            if accept {
                current_length = candidate_length;
                accepted_moves += 1;
                debug_assert!(current.is_permutation());

                if current_length < best_length {
                    best.clone_from(&current);
                    best_length = current_length;
                    trace!(iteration = iterations, best_length, temperature, "new best");
                }
            } else {
                mv.apply(&mut current);
            }

            iterations += 1;
            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                length_history.push(best_length);
            }

            temperature *= config.cooling_rate;
        }

        if length_history
            .last()
            .is_none_or(|&last| (last - best_length).abs() > 1e-15)
        {
            length_history.push(best_length);
        }

        // Drop the rounding drift accumulated by incremental pricing.
        let best_length = tour_length(problem, best.order());

        debug!(
            iterations,
            accepted_moves,
            improving_moves,
            best_length,
            final_temperature = temperature,
            cancelled,
            "annealing finished"
        );

        Ok(AnnealingResult {
            best,
            best_length,
            initial_length,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            length_history,
        })
    }
}

/// Metropolis test for a non-improving move with a draw from `[0, 1)`.
/// A draw equal to `exp(-delta / temperature)` rejects, so `delta == 0`
/// always passes.
fn accepts_uphill(delta: f64, temperature: f64, draw: f64) -> bool {
    draw < (-delta / temperature).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Instance, Point};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn square() -> Instance {
        Instance::new(vec![
            Point::new(0, 0.0, 0.0),
            Point::new(1, 10.0, 0.0),
            Point::new(2, 10.0, 10.0),
            Point::new(3, 0.0, 10.0),
        ])
    }

    /// Points on a circle; the optimal tour visits them in angular order.
    fn circle(n: usize) -> Instance {
        let points = (0..n)
            .map(|i| {
                let a = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                Point::new(i + 1, 100.0 * a.cos(), 100.0 * a.sin())
            })
            .collect();
        Instance::new(points)
    }

    fn circle_optimum(n: usize) -> f64 {
        2.0 * n as f64 * 100.0 * (std::f64::consts::PI / n as f64).sin()
    }

    fn fast_config() -> AnnealingConfig {
        AnnealingConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(1e-3)
            .with_cooling_rate(0.9995)
    }

    #[test]
    fn test_square_converges_to_perimeter() {
        let inst = square();
        let config = AnnealingConfig::default();
        for seed in [1, 42, 2024] {
            let mut rng = StdRng::seed_from_u64(seed);
            let start = Tour::new(vec![0, 2, 1, 3]).expect("valid");
            let result = AnnealingRunner::run(&inst, start, &config, &mut rng).expect("valid");
            assert!(
                (result.best_length - 40.0).abs() < 1e-6,
                "seed {seed}: {}",
                result.best_length
            );
            assert!(result.best.is_permutation());
        }
    }

    #[test]
    fn test_circle_reaches_near_optimum() {
        let inst = circle(12);
        let config = fast_config();
        let mut rng = StdRng::seed_from_u64(42);
        let start = Tour::shuffled(12, &mut rng);
        let result = AnnealingRunner::run(&inst, start, &config, &mut rng).expect("valid");
        let opt = circle_optimum(12);
        assert!(
            result.best_length < opt * 1.05,
            "expected near {opt}, got {}",
            result.best_length
        );
        assert!(result.best_length <= result.initial_length + 1e-9);
    }

    #[test]
    fn test_recompute_strategy_matches_incremental_quality() {
        let inst = circle(10);
        let config = fast_config().with_delta_strategy(DeltaStrategy::Recompute);
        let mut rng = StdRng::seed_from_u64(3);
        let start = Tour::shuffled(10, &mut rng);
        let result = AnnealingRunner::run(&inst, start, &config, &mut rng).expect("valid");
        assert!(result.best_length < circle_optimum(10) * 1.05);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let inst = circle(15);
        let config = fast_config();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let start = Tour::shuffled(15, &mut rng);
            AnnealingRunner::run(&inst, start, &config, &mut rng).expect("valid")
        };
        let a = run(11);
        let b = run(11);
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_length, b.best_length);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_iterations_follow_schedule() {
        let inst = circle(8);
        let config = fast_config();
        let mut rng = StdRng::seed_from_u64(5);
        let result =
            AnnealingRunner::run(&inst, Tour::identity(8), &config, &mut rng).expect("valid");
        let expected = config.estimated_iterations();
        assert!(result.iterations.abs_diff(expected) <= 1);
        assert!(result.final_temperature <= config.min_temperature);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_history_non_increasing() {
        let inst = circle(20);
        let config = fast_config();
        let mut rng = StdRng::seed_from_u64(8);
        let start = Tour::shuffled(20, &mut rng);
        let result = AnnealingRunner::run(&inst, start, &config, &mut rng).expect("valid");
        assert!(result.length_history.len() > 2);
        for window in result.length_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "best length should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_max_iterations_limit() {
        let inst = circle(10);
        let config = AnnealingConfig::default().with_max_iterations(100);
        let mut rng = StdRng::seed_from_u64(1);
        let result =
            AnnealingRunner::run(&inst, Tour::identity(10), &config, &mut rng).expect("valid");
        assert_eq!(result.iterations, 100);
        assert!(result.final_temperature > config.min_temperature);
    }

    #[test]
    fn test_cancellation() {
        let inst = circle(10);
        let config = AnnealingConfig::default();
        let cancel = Arc::new(AtomicBool::new(true));
        let mut rng = StdRng::seed_from_u64(1);
        let result = AnnealingRunner::run_with_cancel(
            &inst,
            Tour::identity(10),
            &config,
            &mut rng,
            Some(cancel),
        )
        .expect("valid");
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, Tour::identity(10));
    }

    #[test]
    fn test_two_points() {
        let inst = Instance::new(vec![Point::new(1, 0.0, 0.0), Point::new(2, 3.0, 4.0)]);
        let mut rng = StdRng::seed_from_u64(1);
        let result = AnnealingRunner::run(&inst, Tour::identity(2), &AnnealingConfig::default(), &mut rng)
            .expect("valid");
        assert!((result.best_length - 10.0).abs() < 1e-10);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_degenerate_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = AnnealingConfig::default();

        let empty = Instance::default();
        let result = AnnealingRunner::run(&empty, Tour::identity(0), &config, &mut rng)
            .expect("valid");
        assert!(result.best.is_empty());
        assert_eq!(result.best_length, 0.0);

        let single = Instance::new(vec![Point::new(9, 1.0, 1.0)]);
        let result = AnnealingRunner::run(&single, Tour::identity(1), &config, &mut rng)
            .expect("valid");
        assert_eq!(result.best.order(), &[0]);
        assert_eq!(result.best_length, 0.0);
    }

    #[test]
    fn test_tour_mismatch() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = AnnealingRunner::run(
            &square(),
            Tour::identity(3),
            &AnnealingConfig::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, TspError::TourMismatch { tour: 3, points: 4 }));
    }

    #[test]
    fn test_invalid_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = AnnealingConfig::default().with_cooling_rate(1.0);
        let err = AnnealingRunner::run(&square(), Tour::identity(4), &config, &mut rng).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)));
    }

    #[test]
    fn test_accepts_uphill_when_hot() {
        let inst = circle(30);
        let config = AnnealingConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling_rate(0.9999);
        let mut rng = StdRng::seed_from_u64(42);
        let result =
            AnnealingRunner::run(&inst, Tour::identity(30), &config, &mut rng).expect("valid");
        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.95, "expected high acceptance when hot, got {ratio}");
        assert!(result.improving_moves < result.accepted_moves);
    }

    /// Every pair of points is one apart, so every reversal has delta 0.
    struct Uniform(usize);

    impl TspProblem for Uniform {
        fn num_points(&self) -> usize {
            self.0
        }

        fn distance(&self, from: usize, to: usize) -> f64 {
            if from == to {
                0.0
            } else {
                1.0
            }
        }
    }

    /// Weyl-sequence generator: fixed output, no seeding machinery.
    struct Sequence(u64);

    impl RngCore for Sequence {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn test_zero_delta_always_accepted() {
        assert!(accepts_uphill(0.0, 1e-12, 1.0 - f64::EPSILON));
        assert!(accepts_uphill(0.0, 1e4, 0.0));
    }

    #[test]
    fn test_draw_equal_to_probability_rejects() {
        let probability = (-5.0f64 / 10.0).exp();
        assert!(!accepts_uphill(5.0, 10.0, probability));
        assert!(accepts_uphill(5.0, 10.0, probability - 1e-12));
        assert!(!accepts_uphill(5.0, 10.0, probability + 1e-12));
    }

    #[test]
    fn test_uphill_rejected_when_cold() {
        assert!(!accepts_uphill(1.0, 1e-5, 0.0));
        assert!(!accepts_uphill(1e-3, 1e-6, 0.0));
        assert!(accepts_uphill(1.0, 1e8, 0.5));
    }

    #[test]
    fn test_flat_landscape_accepts_every_move() {
        let problem = Uniform(7);
        let config = AnnealingConfig::default()
            .with_initial_temperature(1e-3)
            .with_min_temperature(1e-4)
            .with_cooling_rate(0.999);
        let mut rng = Sequence(1);
        let result =
            AnnealingRunner::run(&problem, Tour::identity(7), &config, &mut rng).expect("valid");
        assert!(result.iterations > 0);
        assert_eq!(result.accepted_moves, result.iterations);
        assert_eq!(result.improving_moves, 0);
        assert_eq!(result.best_length, 7.0);
        assert!(result.best.is_permutation());
    }

    #[test]
    fn test_cold_run_rejects_uphill_from_optimum() {
        // Collinear points visited left to right: every reversal that is not
        // a relabelling of the same cycle makes the tour longer.
        let line = Instance::new((0..6).map(|i| Point::new(i, i as f64 * 10.0, 0.0)).collect());
        let start = Tour::identity(6);
        let optimum = tour_length(&line, start.order());
        let config = AnnealingConfig::default()
            .with_initial_temperature(1e-9)
            .with_min_temperature(1e-10)
            .with_cooling_rate(0.99);
        let mut rng = Sequence(3);
        let result = AnnealingRunner::run(&line, start, &config, &mut rng).expect("valid");
        assert!(result.iterations > 0);
        assert_eq!(result.improving_moves, 0);
        assert!(result.accepted_moves < result.iterations);
        assert!((result.best_length - optimum).abs() < 1e-9);
    }
}
