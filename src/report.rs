//! Result report: the solved tour next to the reference value, rendered as
//! text for the console or as JSON.

use crate::io::ReferenceTable;
use crate::sa::TspSolution;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Outcome of solving one instance.
///
/// # Examples
///
/// ```
/// use u_tsp::io::ReferenceTable;
/// use u_tsp::models::{Instance, Point};
/// use u_tsp::report::Report;
/// use u_tsp::sa::{solve, AnnealingConfig};
///
/// let instance = Instance::new(vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 10.0, 0.0),
///     Point::new(3, 10.0, 10.0),
///     Point::new(4, 0.0, 10.0),
/// ]);
/// let config = AnnealingConfig::default().with_seed(1);
/// let solution = solve(&instance, &config, &mut config.rng()).unwrap();
/// let table = ReferenceTable::parse("square: 40.0".as_bytes()).unwrap();
///
/// let report = Report::new("square.tsp", &solution, &table);
/// assert_eq!(report.reference, Some(40.0));
/// assert!(report.to_string().contains("Correct Answer: 40"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Instance name (file stem).
    pub instance: String,
    /// Number of points.
    pub points: usize,
    /// Length of the random starting tour.
    pub initial_length: f64,
    /// Length of the best tour found.
    pub final_length: f64,
    /// External point identifiers in visiting order.
    pub tour: Vec<usize>,
    /// Reference length from the solutions table, if listed.
    pub reference: Option<f64>,
    /// `(final - reference) / reference` in percent.
    pub gap_percent: Option<f64>,
    /// Moves evaluated by the annealer.
    pub iterations: usize,
    /// Wall-clock solve time.
    pub elapsed_ms: u64,
}

impl Report {
    /// Builds a report for `instance` (a name or file name; any extension
    /// is dropped for the reference lookup).
    pub fn new(instance: &str, solution: &TspSolution, references: &ReferenceTable) -> Self {
        let final_length = solution.length();
        let reference = references.get(instance);
        let gap_percent = reference
            .filter(|&r| r > 0.0)
            .map(|r| (final_length - r) / r * 100.0);
        Self {
            instance: crate::io::strip_extension(instance).to_string(),
            points: solution.visit_ids.len(),
            initial_length: solution.initial_length(),
            final_length,
            tour: solution.visit_ids.clone(),
            reference,
            gap_percent,
            iterations: solution.run.iterations,
            elapsed_ms: 0,
        }
    }

    /// Records the solve time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Instance: {} ({} points)", self.instance, self.points)?;
        writeln!(f, "Initial distance: {:.2}", self.initial_length)?;
        writeln!(f, "Final distance: {:.2}", self.final_length)?;
        write!(f, "Tour:")?;
        for id in &self.tour {
            write!(f, " {id}")?;
        }
        writeln!(f)?;
        match self.reference {
            Some(r) => writeln!(f, "Correct Answer: {r}")?,
            None => writeln!(f, "Correct Answer: not available")?,
        }
        if let Some(gap) = self.gap_percent {
            writeln!(f, "Gap: {gap:.2}%")?;
        }
        write!(f, "Iterations: {} in {} ms", self.iterations, self.elapsed_ms)
    }
}
