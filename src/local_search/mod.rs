//! Neighborhood moves for tour search.
//!
//! - [`two_opt`] — 2-opt segment reversal with incremental length delta

mod two_opt;

pub use two_opt::SegmentReversal;
