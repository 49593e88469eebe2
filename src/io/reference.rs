//! Reference-solution table (`solutions.txt`).
//!
//! One entry per line, `name: value`, e.g. `a280 : 2579` or
//! `square.tsp: 40.0`. Names are stored with any extension removed so they
//! match instance file stems. Lines that do not parse, including lines with
//! invalid UTF-8 in the name, are skipped.

use super::lossy_lines;
use crate::error::TspError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Known tour lengths keyed by instance name.
///
/// # Examples
///
/// ```
/// use u_tsp::io::ReferenceTable;
///
/// let table = ReferenceTable::parse("square: 40.0\nnot a line\n".as_bytes()).unwrap();
/// assert_eq!(table.get("square.tsp"), Some(40.0));
/// assert_eq!(table.get("circle"), None);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: HashMap<String, f64>,
}

impl ReferenceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a table from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TspError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TspError::io(path, e))?;
        Self::parse(BufReader::new(file)).map_err(|e| TspError::io(path, e))
    }

    /// Parses table text. Later entries for the same name win.
    pub fn parse<B: BufRead>(reader: B) -> io::Result<Self> {
        let mut table = Self::new();
        for line in lossy_lines(reader) {
            let line = line?;
            match parse_entry(&line) {
                Some((name, value)) => table.insert(name, value),
                None if !line.trim().is_empty() => debug!(line = %line, "skipped reference line"),
                None => {}
            }
        }
        Ok(table)
    }

    /// Adds or replaces the entry for `name` (extension removed).
    pub fn insert(&mut self, name: &str, value: f64) {
        self.entries.insert(strip_extension(name).to_string(), value);
    }

    /// Looks up `name`, ignoring any extension.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(strip_extension(name)).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(line: &str) -> Option<(&str, f64)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let value = value.split_whitespace().next()?.parse().ok()?;
    Some((name, value))
}

/// Removes everything from the first `.` on: `a280.tsp` → `a280`.
pub fn strip_extension(name: &str) -> &str {
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

/// Table key for an instance file: its file name without extension.
///
/// # Examples
///
/// ```
/// use u_tsp::io::instance_key;
///
/// assert_eq!(instance_key("../dataset/berlin52.tsp"), "berlin52");
/// ```
pub fn instance_key(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    strip_extension(&name).to_string()
}
