//! Pipeline configuration.
//!
//! Every constant the conversion depends on lives here and is passed by
//! reference into the components that need it. A config can be built in
//! code or loaded from a TOML file; keys missing from the file keep their
//! defaults.
//!
//! ```toml
//! title = "Paws & Claws - Requirements Specification"
//! skip_lines = 2
//! strip_patterns = ["GRM - USC", "USC"]
//! ```

use crate::error::{ReqSortError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Metadata lines dropped before CSV parsing begins.
    pub skip_lines: usize,
    /// Minimum card content length (in chars) for a row to be kept.
    pub min_story_len: usize,
    /// Boilerplate removed from card content, applied in order.
    pub strip_patterns: Vec<String>,
    /// Document heading.
    pub title: String,
    /// Marker that renders as a line break inside a table cell.
    pub line_break: String,
    /// Prefix placed before each verification criterion.
    pub bullet: String,
    /// Word that starts a new verification criterion.
    pub criterion_keyword: String,
    /// Verification text used when a row has no confirmation section.
    pub empty_verification: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            skip_lines: 2,
            min_story_len: 5,
            strip_patterns: vec!["GRM - USC".to_string(), "USC".to_string()],
            title: "Paws & Claws - Requirements Specification".to_string(),
            line_break: "<br>".to_string(),
            bullet: "• ".to_string(),
            criterion_keyword: "Test".to_string(),
            empty_verification: "N/A".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ReqSortError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ReqSortError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_skip_lines(mut self, n: usize) -> Self {
        self.skip_lines = n;
        self
    }

    pub fn with_strip_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strip_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// The verification list item marker, e.g. `• **Test**`.
    pub fn criterion_marker(&self) -> String {
        format!("{}**{}**", self.bullet, self.criterion_keyword)
    }
}
