use crate::error::Result;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Returns true if `target` already holds exactly `expected`.
///
/// A missing target counts as out of date; any other read failure is an error.
pub(crate) fn is_up_to_date(target: &Path, expected: &str) -> Result<bool> {
    match fs::read(target) {
        Ok(current) => Ok(current == expected.as_bytes()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
