//! Annealing configuration.

use crate::error::TspError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// How the annealer prices a candidate move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeltaStrategy {
    /// Price only the two edges the reversal replaces. O(1) per move.
    #[default]
    Incremental,
    /// Recompute the whole tour length after every move. O(n) per move.
    Recompute,
}

/// Configuration for the annealing run.
///
/// Temperature starts at `initial_temperature`, is multiplied by
/// `cooling_rate` after every move, and the run ends once it is no longer
/// above `min_temperature`. The iteration count is therefore implicit,
/// about `ln(min / initial) / ln(cooling_rate)`.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::{AnnealingConfig, DeltaStrategy};
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.999)
///     .with_delta_strategy(DeltaStrategy::Recompute)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.estimated_iterations(), 9206);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// The run stops when the temperature drops to this value.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = cooling_rate * T_k`.
    pub cooling_rate: f64,

    /// Hard iteration budget. 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Move pricing.
    pub delta_strategy: DeltaStrategy,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            min_temperature: 1e-5,
            cooling_rate: 0.9999,
            max_iterations: 0,
            seed: None,
            delta_strategy: DeltaStrategy::default(),
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_delta_strategy(mut self, strategy: DeltaStrategy) -> Self {
        self.delta_strategy = strategy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TspError> {
        let invalid = |msg: String| Err(TspError::InvalidConfig(msg));
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return invalid(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return invalid(format!(
                "min_temperature must be positive and finite, got {}",
                self.min_temperature
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }

    /// Number of moves the schedule runs for when no budget cuts it short.
    pub fn estimated_iterations(&self) -> usize {
        let steps = (self.min_temperature / self.initial_temperature).ln() / self.cooling_rate.ln();
        steps.ceil().max(0.0) as usize
    }

    /// Creates the run's random generator: seeded from `seed` when set,
    /// otherwise from the operating system.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
