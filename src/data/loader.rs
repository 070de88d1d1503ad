use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use super::model::{IrisRecord, IrisTable};
use crate::error::{FixtureError, Result};

/// Number of fields every source row must carry.
pub const FIELD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Where the headerless source table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched with a blocking HTTP GET.
    Url(String),
    /// A local copy of the same file.
    Path(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the source table, naming its columns with `column_names`.
pub fn load(source: &Source, column_names: &[&str; FIELD_COUNT]) -> Result<IrisTable> {
    let table = match source {
        Source::Url(url) => {
            let body = fetch_source(url)?;
            parse_records(body.as_bytes(), column_names)?
        }
        Source::Path(path) => {
            let file = File::open(path)
                .map_err(|e| FixtureError::unavailable(path.display().to_string(), e))?;
            parse_records(BufReader::new(file), column_names)?
        }
    };
    info!("Loaded {} rows from {source}", table.len());
    Ok(table)
}

// ---------------------------------------------------------------------------
// HTTP fetch
// ---------------------------------------------------------------------------

/// Download the resource at `url` as text. Any transport failure or
/// non-success status makes the source unavailable.
pub fn fetch_source(url: &str) -> Result<String> {
    debug!("GET {url}");
    reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| FixtureError::unavailable(url, e))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse headerless comma-separated rows. Blank lines are skipped; every
/// other line must have exactly five fields with numeric measurements.
pub fn parse_records<R: Read>(reader: R, column_names: &[&str; FIELD_COUNT]) -> Result<IrisTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = StringRecord::from(column_names.to_vec());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| FixtureError::Parse {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != FIELD_COUNT {
            return Err(FixtureError::Parse {
                line,
                reason: format!("expected {FIELD_COUNT} fields, found {}", record.len()),
            });
        }

        let row: IrisRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| FixtureError::Parse {
                line,
                reason: e.to_string(),
            })?;
        rows.push(row);
    }

    Ok(IrisTable::new(rows))
}
