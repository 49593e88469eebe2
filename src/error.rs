//! Error type shared by the loaders, the annealing configuration, and the
//! dataset selection helpers.

use std::path::PathBuf;

/// Errors reported by `u-tsp`.
///
/// Malformed coordinate or reference lines are not errors: they are skipped
/// where they are read.
#[derive(Debug, thiserror::Error)]
pub enum TspError {
    /// A file could not be opened or read.
    #[error("cannot read {}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The instance file contained no usable coordinates.
    #[error("no coordinates parsed from {}", path.display())]
    EmptyInstance {
        /// Path of the instance file.
        path: PathBuf,
    },

    /// The dataset directory holds no `.tsp` files.
    #[error("no .tsp files found in {}", dir.display())]
    NoInstances {
        /// Directory that was scanned.
        dir: PathBuf,
    },

    /// A 1-based selection outside `1..=available`.
    #[error("invalid selection {choice}, expected 1..={available}")]
    InvalidSelection {
        /// The requested entry.
        choice: usize,
        /// Number of entries on offer.
        available: usize,
    },

    /// A starting tour whose length differs from the problem size.
    #[error("tour visits {tour} positions but the problem has {points} points")]
    TourMismatch {
        /// Tour length.
        tour: usize,
        /// Number of points in the problem.
        points: usize,
    },

    /// Annealing parameters that cannot drive a run.
    #[error("invalid annealing config: {0}")]
    InvalidConfig(String),
}

impl TspError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TspError::Io {
            path: path.into(),
            source,
        }
    }
}
