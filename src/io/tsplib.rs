//! TSPLIB coordinate files.
//!
//! Only what a Euclidean 2-D instance needs is read:
//!
//! ```text
//! NAME : square
//! COMMENT : 4 corners
//! DIMENSION : 4
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! 1 0 0
//! 2 10 0
//! 3 10 10
//! 4 0 10
//! EOF
//! ```
//!
//! Header entries are `KEY : VALUE`. Coordinate lines are `id x y`; anything
//! after the third field is ignored and lines that do not parse, or carry a
//! non-finite coordinate, are skipped. Invalid UTF-8 is replaced, not fatal.
//! The coordinate block ends at `EOF`, at the next `*_SECTION` keyword, or
//! at the end of input.

use super::lossy_lines;
use crate::error::TspError;
use crate::models::{Instance, InstanceHeader, Point};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

const COORD_SECTION: &str = "NODE_COORD_SECTION";
const TERMINATOR: &str = "EOF";

/// Reads an instance from a TSPLIB file.
///
/// Fails if the file cannot be read or holds no parsable coordinates.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance, TspError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TspError::io(path, e))?;
    let instance = parse_instance(BufReader::new(file)).map_err(|e| TspError::io(path, e))?;

    if instance.is_empty() {
        return Err(TspError::EmptyInstance {
            path: path.to_path_buf(),
        });
    }

    let header = instance.header();
    if let Some(kind) = header.edge_weight_type.as_deref() {
        if kind != "EUC_2D" {
            warn!(
                edge_weight_type = kind,
                "instance is not EUC_2D, solving with Euclidean distances"
            );
        }
    }
    if let Some(dimension) = header.dimension {
        if dimension != instance.len() {
            warn!(
                dimension,
                parsed = instance.len(),
                "DIMENSION disagrees with parsed coordinates"
            );
        }
    }
    info!(
        path = %path.display(),
        name = instance.name().unwrap_or("-"),
        points = instance.len(),
        "instance loaded"
    );
    Ok(instance)
}

/// Parses TSPLIB text. An input without coordinates gives an empty instance.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_instance;
///
/// let text = "NAME : pair\nNODE_COORD_SECTION\n1 0 0\nbad line\n2 3 4\nEOF\n";
/// let instance = parse_instance(text.as_bytes()).unwrap();
/// assert_eq!(instance.name(), Some("pair"));
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.point(1).id(), 2);
/// ```
pub fn parse_instance<B: BufRead>(reader: B) -> io::Result<Instance> {
    let mut header = InstanceHeader::default();
    let mut points = Vec::new();
    let mut in_coords = false;
    let mut skipped = 0usize;

    for line in lossy_lines(reader) {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == TERMINATOR {
            break;
        }
        if trimmed.contains(COORD_SECTION) {
            in_coords = true;
            continue;
        }
        if in_coords {
            if trimmed.ends_with("_SECTION") {
                break;
            }
            match parse_coord(trimmed) {
                Some(point) => points.push(point),
                None => skipped += 1,
            }
        } else {
            read_header_entry(trimmed, &mut header);
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped malformed coordinate lines");
    }
    Ok(Instance::new(points).with_header(header))
}

fn parse_coord(line: &str) -> Option<Point> {
    let mut fields = line.split_whitespace();
    let id = fields.next()?.parse().ok()?;
    let x: f64 = fields.next()?.parse().ok()?;
    let y: f64 = fields.next()?.parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(id, x, y))
}

fn read_header_entry(line: &str, header: &mut InstanceHeader) {
    let Some((key, value)) = line.split_once(':') else {
        return;
    };
    let value = value.trim();
    match key.trim().to_ascii_uppercase().as_str() {
        "NAME" => header.name = Some(value.to_string()),
        "COMMENT" => header.comment = Some(value.to_string()),
        "DIMENSION" => header.dimension = value.parse().ok(),
        "EDGE_WEIGHT_TYPE" => header.edge_weight_type = Some(value.to_string()),
        _ => {}
    }
}
