//! Point type.

use serde::{Deserialize, Serialize};

/// A location in a Euclidean TSP instance.
///
/// `id` is the external label from the instance file; it is preserved for
/// reporting and may differ from the point's position in the [`Instance`].
///
/// [`Instance`]: super::Instance
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let a = Point::new(1, 0.0, 0.0);
/// let b = Point::new(2, 3.0, 4.0);
/// assert_eq!(b.id(), 2);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// External identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(7, 10.0, 20.0);
        assert_eq!(p.id(), 7);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(1, 0.0, 0.0);
        let b = Point::new(2, 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(1, 1.0, 2.0);
        let b = Point::new(2, -4.0, 6.5);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_to_self() {
        let a = Point::new(1, 12.5, -3.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
