//! 2-opt segment reversal move.
//!
//! # Move
//!
//! Reversing the closed segment of positions `[i, j]` in a cyclic tour
//! removes the edges entering and leaving the segment and reconnects the
//! segment's endpoints the other way round:
//!
//! ```text
//! before: ... - t[i-1] - t[i] - ... - t[j] - t[j+1] - ...
//! after:  ... - t[i-1] - t[j] - ... - t[i] - t[j+1] - ...
//!
//! delta = d(t[i-1], t[j]) + d(t[i], t[j+1]) - d(t[i-1], t[i]) - d(t[j], t[j+1])
//! ```
//!
//! Indices wrap around. Reversing the whole tour (`i = 0`, `j = n-1`) keeps
//! the same edge set, so its delta is zero.
//!
//! The move is self-inverse: applying it twice restores the tour.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::{Tour, TspProblem};
use rand::Rng;

/// Reversal of the closed position segment `[start, end]`, `start < end`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Point, Tour};
/// use u_tsp::distance::tour_length;
/// use u_tsp::local_search::SegmentReversal;
///
/// let square = Instance::new(vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 10.0, 0.0),
///     Point::new(2, 10.0, 10.0),
///     Point::new(3, 0.0, 10.0),
/// ]);
/// // 0 -> 2 -> 1 -> 3 crosses itself
/// let mut tour = Tour::new(vec![0, 2, 1, 3]).unwrap();
/// let mv = SegmentReversal::new(2, 1).unwrap();
/// let delta = mv.delta(&square, &tour);
///
/// let before = tour_length(&square, tour.order());
/// mv.apply(&mut tour);
/// assert_eq!(tour.order(), &[0, 1, 2, 3]);
/// assert!((tour_length(&square, tour.order()) - (before + delta)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentReversal {
    start: usize,
    end: usize,
}

impl SegmentReversal {
    /// Creates the move reversing positions between `a` and `b` inclusive,
    /// in either order.
    ///
    /// Returns `None` if `a == b`.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { start: a, end: b }),
            std::cmp::Ordering::Greater => Some(Self { start: b, end: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Draws a move uniformly over position pairs of a tour of length `n`.
    ///
    /// Equal draws are redrawn. Returns `None` without touching `rng` when
    /// `n < 2`, since no two distinct positions exist.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Option<Self> {
        if n < 2 {
            return None;
        }
        loop {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if let Some(mv) = Self::new(a, b) {
                return Some(mv);
            }
        }
    }

    /// First reversed position.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last reversed position.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Applies the reversal to `tour` in place.
    ///
    /// # Panics
    ///
    /// Panics if `end() >= tour.len()`.
    pub fn apply(&self, tour: &mut Tour) {
        tour.reverse_segment(self.start, self.end);
    }

    /// Length change this move would cause on `tour`, computed from the two
    /// replaced edges. Call before [`apply`](Self::apply).
    ///
    /// Tours shorter than two points have nothing to reverse and give `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if `end() >= tour.len()` on a tour of two or more points.
    pub fn delta<P: TspProblem + ?Sized>(&self, problem: &P, tour: &Tour) -> f64 {
        let order = tour.order();
        let n = order.len();
        if n < 2 || (self.start == 0 && self.end == n - 1) {
            return 0.0;
        }
        let prev = order[(self.start + n - 1) % n];
        let next = order[(self.end + 1) % n];
        let first = order[self.start];
        let last = order[self.end];

        let old_cost = problem.distance(prev, first) + problem.distance(last, next);
        let new_cost = problem.distance(prev, last) + problem.distance(first, next);

        new_cost - old_cost
    }
}
