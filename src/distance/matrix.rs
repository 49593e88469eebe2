//! Dense distance matrix.

use crate::models::{Point, TspProblem};

/// A dense n×n distance matrix stored in row-major order.
///
/// Precomputing distances trades `n²` memory for table lookups in the
/// annealing loop.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, TspProblem};
/// use u_tsp::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 3.0, 4.0),
///     Point::new(3, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.num_points(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl TspProblem for DistanceMatrix {
    fn num_points(&self) -> usize {
        self.size
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}
