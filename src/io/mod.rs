//! Plain-text inputs: TSPLIB instances, the reference-solution table, and
//! the dataset directory they live in.

mod dataset;
mod reference;
mod tsplib;

pub use dataset::{list_instances, select_instance};
pub use reference::{instance_key, strip_extension, ReferenceTable};
pub use tsplib::{load_instance, parse_instance};

use std::io::{self, BufRead};

/// Lines of `reader` with invalid UTF-8 replaced, so a bad byte spoils at
/// most its own line. Only read failures are errors.
fn lossy_lines<B: BufRead>(reader: B) -> impl Iterator<Item = io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}
