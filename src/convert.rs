//! End-to-end conversion: export text in, Markdown document out.

use crate::config::PipelineConfig;
use crate::error::{ReqSortError, Result};
use crate::input::read_rows;
use crate::pipeline::{PipelineStats, run_pipeline};
use crate::render::render_document;
use std::fs;
use std::path::Path;
use tracing::info;

/// Result of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The rendered Markdown document.
    pub document: String,
    pub stats: PipelineStats,
    /// Record ids in rendered order.
    pub ids: Vec<String>,
}

impl Conversion {
    pub fn record_count(&self) -> usize {
        self.ids.len()
    }

    /// The first two ids in sort order, e.g. `BRD - USC 1 -> GRM - USC 1 ...`.
    ///
    /// `None` when no records were kept.
    pub fn example_order(&self) -> Option<String> {
        match self.ids.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [first, second, ..] => Some(format!("{first} -> {second} ...")),
        }
    }
}

/// Convert export text held in memory.
pub fn convert(text: &str, config: &PipelineConfig) -> Result<Conversion> {
    let rows = read_rows(text, config)?;
    let mut output = run_pipeline(rows, config);
    let document = render_document(&mut output.records, config);

    info!(
        rows = output.stats.rows_read,
        kept = output.stats.rows_kept,
        rejected = output.stats.rows_rejected,
        "converted requirements"
    );

    Ok(Conversion {
        document,
        stats: output.stats,
        ids: output.records.into_iter().map(|r| r.id).collect(),
    })
}

/// Read and convert an export file.
pub fn convert_file(input: &Path, config: &PipelineConfig) -> Result<Conversion> {
    let text = fs::read_to_string(input).map_err(|source| ReqSortError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    convert(&text, config)
}

/// Write a rendered document, creating missing parent directories.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    let write_error = |source: std::io::Error| ReqSortError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, document).map_err(write_error)
}
