//! Closed-tour length.

use crate::models::{Point, TspProblem};

/// Straight-line distance between two points.
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}

/// Length of the closed tour visiting `order`, including the edge from the
/// last location back to the first.
///
/// Tours with fewer than two locations have length zero.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Point};
/// use u_tsp::distance::tour_length;
///
/// let square = Instance::new(vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 10.0, 0.0),
///     Point::new(2, 10.0, 10.0),
///     Point::new(3, 0.0, 10.0),
/// ]);
/// assert!((tour_length(&square, &[0, 1, 2, 3]) - 40.0).abs() < 1e-10);
/// assert_eq!(tour_length(&square, &[2]), 0.0);
/// ```
pub fn tour_length<P: TspProblem + ?Sized>(problem: &P, order: &[usize]) -> f64 {
    let n = order.len();
    if n < 2 {
        return 0.0;
    }
    let mut dist = 0.0;
    for i in 0..n - 1 {
        dist += problem.distance(order[i], order[i + 1]);
    }
    dist + problem.distance(order[n - 1], order[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instance;

    fn triangle() -> Instance {
        Instance::new(vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 3.0, 0.0),
            Point::new(3, 3.0, 4.0),
        ])
    }

    #[test]
    fn test_euclidean() {
        let a = Point::new(1, -1.0, -1.0);
        let b = Point::new(2, 2.0, 3.0);
        assert!((euclidean(&a, &b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_triangle() {
        let inst = triangle();
        // 3 + 4 + 5
        assert!((tour_length(&inst, &[0, 1, 2]) - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_rotation_and_reversal() {
        let inst = Instance::new(vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 5.0, 1.0),
            Point::new(3, 7.0, 8.0),
            Point::new(4, -2.0, 6.0),
            Point::new(5, 1.0, 3.0),
        ]);
        let base = tour_length(&inst, &[0, 3, 1, 4, 2]);
        assert!((tour_length(&inst, &[1, 4, 2, 0, 3]) - base).abs() < 1e-9);
        assert!((tour_length(&inst, &[2, 4, 1, 3, 0]) - base).abs() < 1e-9);
    }

    #[test]
    fn test_tour_length_two_points() {
        let inst = triangle();
        assert!((tour_length(&inst, &[0, 2]) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_degenerate() {
        let inst = triangle();
        assert_eq!(tour_length(&inst, &[]), 0.0);
        assert_eq!(tour_length(&inst, &[1]), 0.0);
    }
}
