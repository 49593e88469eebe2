//! Problem instance: points plus the TSPLIB header they came with.

use super::{Point, TspProblem};

/// Header fields read from a TSPLIB file.
///
/// All fields are optional; only the coordinate block is required to solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceHeader {
    /// `NAME` entry.
    pub name: Option<String>,
    /// `COMMENT` entry.
    pub comment: Option<String>,
    /// `DIMENSION` entry, the declared number of points.
    pub dimension: Option<usize>,
    /// `EDGE_WEIGHT_TYPE` entry, e.g. `EUC_2D`.
    pub edge_weight_type: Option<String>,
}

/// An ordered collection of points.
///
/// Point `i` is addressed internally by index `i`; its external identifier
/// is kept on the [`Point`] for reporting.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Point, TspProblem};
///
/// let instance = Instance::new(vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 3.0, 4.0),
/// ]);
/// assert_eq!(instance.len(), 2);
/// assert!((instance.distance(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(instance.external_ids(&[1, 0]), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Instance {
    header: InstanceHeader,
    points: Vec<Point>,
}

impl Instance {
    /// Creates an instance with an empty header.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            header: InstanceHeader::default(),
            points,
        }
    }

    /// Attaches header metadata.
    pub fn with_header(mut self, header: InstanceHeader) -> Self {
        self.header = header;
        self
    }

    /// Header metadata.
    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    /// `NAME` from the header, if present.
    pub fn name(&self) -> Option<&str> {
        self.header.name.as_deref()
    }

    /// All points in internal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at internal index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn point(&self, index: usize) -> &Point {
        &self.points[index]
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the instance has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maps internal indices to external identifiers, preserving order.
    pub fn external_ids(&self, order: &[usize]) -> Vec<usize> {
        order.iter().map(|&i| self.points[i].id()).collect()
    }
}

impl TspProblem for Instance {
    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.points[from].distance_to(&self.points[to])
    }
}
