//! Sorting and Markdown rendering.
//!
//! Records are ordered by [`SortKey`](crate::SortKey) and written as a
//! GitHub-style pipe table under a fixed heading:
//!
//! ```text
//! # Paws & Claws - Requirements Specification
//!
//! > **Total User Stories:** 2
//! > *Sorted by Module ID (Natural Order)*
//!
//! | ID          | Title     | User Story | Details | Verification |
//! |:------------|:----------|:-----------|:--------|:-------------|
//! | BRD - USC 1 | Book stay | ...        | ...     | ...          |
//! ```

use crate::config::PipelineConfig;
use crate::record::ParsedRecord;

/// Table column headings, in order.
pub const COLUMNS: [&str; 5] = ["ID", "Title", "User Story", "Details", "Verification"];

/// Sort by group, then number. Equal keys keep their input order.
pub fn sort_records(records: &mut [ParsedRecord]) {
    records.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Make a cell safe for a single table row.
fn clean_cell(text: &str, line_break: &str) -> String {
    text.replace("\r\n", line_break)
        .replace('\n', line_break)
        .replace('|', "\\|")
}

/// Render records as a pipe table, in the order given.
pub fn render_table(records: &[ParsedRecord], config: &PipelineConfig) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| r.columns().map(|cell| clean_cell(cell, &config.line_break)))
        .collect();

    let mut widths = COLUMNS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, COLUMNS.iter().copied(), &widths);

    out.push('|');
    for width in &widths {
        out.push(':');
        out.push_str(&"-".repeat(width + 1));
        out.push('|');
    }
    out.push('\n');

    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 5]) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        let pad = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        out.push_str(" |");
    }
    out.push('\n');
}

/// Sort `records` and render the complete document.
pub fn render_document(records: &mut [ParsedRecord], config: &PipelineConfig) -> String {
    sort_records(records);

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", config.title));
    out.push_str(&format!("> **Total User Stories:** {}\n", records.len()));
    out.push_str("> *Sorted by Module ID (Natural Order)*\n\n");
    out.push_str(&render_table(records, config));
    out
}
