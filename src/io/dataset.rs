//! Dataset directory listing and selection.

use crate::error::TspError;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the `.tsp` files directly inside `dir`, sorted by path.
///
/// Fails if the directory cannot be read or contains no `.tsp` files.
pub fn list_instances(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, TspError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| TspError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| TspError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "tsp") {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(TspError::NoInstances {
            dir: dir.to_path_buf(),
        });
    }
    files.sort();
    Ok(files)
}

/// Picks entry `choice` (1-based) from `files`.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use u_tsp::io::select_instance;
///
/// let files = vec![PathBuf::from("a.tsp"), PathBuf::from("b.tsp")];
/// assert_eq!(select_instance(&files, 2).unwrap(), PathBuf::from("b.tsp").as_path());
/// assert!(select_instance(&files, 0).is_err());
/// assert!(select_instance(&files, 3).is_err());
/// ```
pub fn select_instance(files: &[PathBuf], choice: usize) -> Result<&Path, TspError> {
    choice
        .checked_sub(1)
        .and_then(|i| files.get(i))
        .map(PathBuf::as_path)
        .ok_or(TspError::InvalidSelection {
            choice,
            available: files.len(),
        })
}
