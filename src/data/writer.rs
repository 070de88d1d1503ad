use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::info;

use super::model::EncodedTable;
use crate::error::{FixtureError, Result};

/// Header row of the fixture file.
pub const HEADER: [&str; 3] = ["sepal-length", "sepal-width", "class"];

/// Write `table` to `path` as comma-separated text with a header row and no
/// index column. An existing file is overwritten.
pub fn write_csv(table: &EncodedTable, path: &Path) -> Result<()> {
    let to_write_error = |source: io::Error| FixtureError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    write_to(table, file).map_err(to_write_error)?;

    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Serialize `table` into any writer. The writer is flushed before returning.
pub fn write_to<W: Write>(table: &EncodedTable, writer: W) -> io::Result<()> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty table still gets its header.
    out.write_record(HEADER)?;
    for row in &table.rows {
        out.serialize(row)?;
    }
    out.flush()
}
