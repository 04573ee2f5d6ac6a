//! CSV output formatting.

use crate::types::Record;
use std::io::{self, Write};

/// Write records as CSV with a header row.
pub fn write_csv<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["title", "author", "rating"])?;

    for record in records {
        wtr.write_record([
            record.title.as_str(),
            record.author.as_str(),
            &record.rating.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
