//! TSP problem trait.

/// A symmetric TSP instance as seen by tour evaluation and the annealer.
///
/// Locations are addressed by internal index `0..num_points()`. Implemented
/// by [`Instance`](super::Instance), which computes Euclidean distances on
/// demand, and by [`DistanceMatrix`](crate::distance::DistanceMatrix), which
/// precomputes them.
///
/// # Examples
///
/// ```
/// use u_tsp::models::TspProblem;
///
/// struct Line(Vec<f64>);
///
/// impl TspProblem for Line {
///     fn num_points(&self) -> usize { self.0.len() }
///     fn distance(&self, from: usize, to: usize) -> f64 {
///         (self.0[from] - self.0[to]).abs()
///     }
/// }
///
/// let line = Line(vec![0.0, 2.0, 5.0]);
/// assert_eq!(line.num_points(), 3);
/// assert_eq!(line.distance(0, 2), 5.0);
/// ```
pub trait TspProblem: Send + Sync {
    /// Number of locations.
    fn num_points(&self) -> usize;

    /// Distance between locations `from` and `to`.
    ///
    /// Must be non-negative and symmetric.
    fn distance(&self, from: usize, to: usize) -> f64;
}
