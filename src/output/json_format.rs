//! JSON output formatting.

use crate::types::Record;
use std::io::{self, Write};

/// Write records as a JSON array.
pub fn write_json<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", json)
}
