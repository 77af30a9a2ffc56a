//! Reading rows from the requirements export.
//!
//! The export starts with metadata lines that are not CSV. They are dropped
//! as raw lines before the remainder goes through a standard CSV reader, so
//! quoted fields may still carry commas and newlines.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::record::RawRow;
use tracing::debug;

/// Rows need an identifier and at least one more field.
pub const MIN_FIELDS: usize = 2;

/// Drop the first `n` physical lines of `text`.
///
/// Lines may end in `\n`, `\r\n`, or a lone `\r`.
pub fn skip_metadata(text: &str, n: usize) -> &str {
    let mut rest = text;
    for _ in 0..n {
        let Some(end) = rest.find(['\r', '\n']) else {
            return "";
        };
        let after = &rest[end + 1..];
        rest = if rest[end..].starts_with('\r') {
            after.strip_prefix('\n').unwrap_or(after)
        } else {
            after
        };
    }
    rest
}

/// Parse the export into rows with at least [`MIN_FIELDS`] fields.
pub fn read_rows(text: &str, config: &PipelineConfig) -> Result<Vec<RawRow>> {
    let body = skip_metadata(text, config.skip_lines);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < MIN_FIELDS {
            debug!(row = index + 1, fields = record.len(), "skipping short row");
            continue;
        }
        rows.push(RawRow::from_fields(record.iter()));
    }

    Ok(rows)
}
