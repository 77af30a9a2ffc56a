//! Row-at-a-time record pipeline.
//!
//! Each raw row flows through decomposition, section splitting, the
//! validity filter, and text formatting before the next row is read. Rows
//! are never rejected with an error; they either produce a record or are
//! dropped for having too little card content.

use crate::config::PipelineConfig;
use crate::format::{format_confirmation, format_conversation};
use crate::identifier::decompose;
use crate::input::MIN_FIELDS;
use crate::record::{ParsedRecord, RawRow};
use crate::sections::split_sections;
use tracing::debug;

/// What became of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Kept(ParsedRecord),
    /// Card content shorter than the configured minimum.
    Rejected { id: String, story_len: usize },
    /// Fewer than [`MIN_FIELDS`] fields.
    TooFewFields,
}

/// Row counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_rejected: usize,
}

/// Records collected by [`run_pipeline`], in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub records: Vec<ParsedRecord>,
    pub stats: PipelineStats,
}

/// Turn one raw row into a record, or say why it was dropped.
pub fn process_row(row: &RawRow, config: &PipelineConfig) -> RowOutcome {
    if row.field_count() < MIN_FIELDS {
        return RowOutcome::TooFewFields;
    }
    let (Some(raw_id), Some(category)) = (row.identifier(), row.category()) else {
        return RowOutcome::TooFewFields;
    };

    let ident = decompose(raw_id.trim());
    let category = category.trim().to_string();
    let sections = split_sections(&row.text_blob(), config);

    let story_len = sections.card.chars().count();
    if story_len < config.min_story_len {
        return RowOutcome::Rejected {
            id: ident.id,
            story_len,
        };
    }

    RowOutcome::Kept(ParsedRecord {
        key: ident.key,
        id: ident.id,
        title: ident.title,
        details: format_conversation(&sections.conversation, config),
        verification: format_confirmation(&sections.confirmation, config),
        user_story: sections.card,
        category,
    })
}

/// Push every row through [`process_row`], collecting kept records.
pub fn run_pipeline<I>(rows: I, config: &PipelineConfig) -> PipelineOutput
where
    I: IntoIterator<Item = RawRow>,
{
    let mut output = PipelineOutput::default();

    for row in rows {
        match process_row(&row, config) {
            RowOutcome::Kept(record) => {
                output.stats.rows_read += 1;
                output.stats.rows_kept += 1;
                output.records.push(record);
            }
            RowOutcome::Rejected { id, story_len } => {
                output.stats.rows_read += 1;
                output.stats.rows_rejected += 1;
                debug!(%id, story_len, "dropping row with short card content");
            }
            RowOutcome::TooFewFields => {
                debug!(fields = row.field_count(), "skipping short row");
            }
        }
    }

    output
}
