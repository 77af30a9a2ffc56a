//! # reqsort
//!
//! Converts a requirements CSV export into a sorted Markdown document.
//!
//! ## Overview
//!
//! Each export row packs a compound identifier, a free-text blob, and a
//! category. Conversion runs row by row:
//! - **Decompose** the identifier into a display id, a title, and a sort key
//! - **Split** the blob into card, conversation, and confirmation sections
//! - **Format** conversation and confirmation text with line-break markup
//! - **Filter** rows whose card content is too short
//!
//! Kept records are then sorted by (group, number) and rendered as a pipe
//! table. Malformed input never fails a row; it falls back to sentinel or
//! empty values instead.
//!
//! ## Example
//!
//! ```
//! use reqsort::{PipelineConfig, convert};
//!
//! let export = "Backlog export\nGenerated\n\
//!     GRM-USC 10-Roster,As a groomer I want a roster.,Feature\n\
//!     GRM-USC 2-Alerts,As a groomer I want alerts.,Feature\n";
//!
//! let conversion = convert(export, &PipelineConfig::default()).unwrap();
//!
//! assert_eq!(conversion.ids, vec!["GRM - USC 2", "GRM - USC 10"]);
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod identifier;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod sections;

pub use config::PipelineConfig;
pub use convert::{Conversion, convert, convert_file, write_document};
pub use error::{ReqSortError, Result};
pub use format::{format_confirmation, format_conversation};
pub use identifier::{Identifier, SortGroup, SortKey, UNASSIGNED_GROUP, UNNUMBERED, decompose};
pub use input::{read_rows, skip_metadata};
pub use pipeline::{PipelineOutput, PipelineStats, RowOutcome, process_row, run_pipeline};
pub use record::{ParsedRecord, RawRow};
pub use render::{COLUMNS, render_document, render_table, sort_records};
pub use sections::{Label, Sections, split_at_label, split_sections};
