//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV listings of the library.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_error, print_warning, write_info, write_plain, write_success, write_warning};

use crate::cli::OutputFormat;
use crate::types::Record;
use std::io::{self, Write};

/// Write a record listing in the requested format.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[Record],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::write_plain(out, records),
        OutputFormat::Json => json_format::write_json(out, records),
        OutputFormat::Csv => csv_format::write_csv(out, records),
    }
}
