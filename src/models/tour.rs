//! Tour type: a cyclic visiting order over internal point indices.

use rand::seq::SliceRandom;
use rand::Rng;

/// A closed tour, stored as a permutation of `0..n`.
///
/// The position after the last one wraps to the first. Every index appears
/// exactly once; constructors enforce this and [`reverse_segment`] preserves
/// it.
///
/// [`reverse_segment`]: Tour::reverse_segment
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let mut tour = Tour::identity(5);
/// tour.reverse_segment(1, 3);
/// assert_eq!(tour.order(), &[0, 3, 2, 1, 4]);
/// assert!(tour.is_permutation());
///
/// assert!(Tour::new(vec![0, 2, 1]).is_some());
/// assert!(Tour::new(vec![0, 0, 1]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps a visiting order.
    ///
    /// Returns `None` if `order` is not a permutation of `0..order.len()`.
    pub fn new(order: Vec<usize>) -> Option<Self> {
        if is_permutation(&order) {
            Some(Self { order })
        } else {
            None
        }
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// A uniformly shuffled tour over `0..n`.
    pub fn shuffled<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut tour = Self::identity(n);
        tour.order.shuffle(rng);
        tour
    }

    /// Visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the empty tour.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reverses the closed segment of positions `[i, j]` in place.
    ///
    /// Applying the same reversal twice restores the tour.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j >= len()`.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        self.order[i..=j].reverse();
    }

    /// Returns `true` if the order is a permutation of `0..len()`.
    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.order)
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &v in order {
        if v >= seen.len() || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
