//! Error types for reqsort.
//!
//! Only whole-run failures are errors. Malformed identifiers, missing
//! section labels, and rows with too little card content are recovered as
//! values inside the pipeline and never surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum ReqSortError {
    /// The requirements export could not be read.
    #[error("failed to read input '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered document could not be written.
    #[error("failed to write output '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV layer rejected the input stream.
    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// A configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid TOML for [`PipelineConfig`](crate::PipelineConfig).
    #[error("invalid config '{}': {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReqSortError>;
