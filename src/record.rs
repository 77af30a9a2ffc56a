//! Row and record types.

use crate::identifier::SortKey;

/// One CSV row as read from the export.
///
/// Field 0 is the identifier, the last field is the category, and the
/// fields in between make up the requirement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<String>,
}

impl RawRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Build a row from string slices (convenient in tests and fixtures).
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(fields.into_iter().map(Into::into).collect())
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn identifier(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.fields.last().map(String::as_str)
    }

    /// Middle fields rejoined with `,`; empty for rows of fewer than three fields.
    pub fn text_blob(&self) -> String {
        match self.fields.len() {
            0..=2 => String::new(),
            n => self.fields[1..n - 1].join(","),
        }
    }
}

/// A requirement ready for sorting and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub key: SortKey,
    pub id: String,
    pub title: String,
    pub user_story: String,
    pub details: String,
    pub verification: String,
    /// Category column of the export; carried but not rendered.
    pub category: String,
}

impl ParsedRecord {
    /// The five rendered columns, in table order.
    pub fn columns(&self) -> [&str; 5] {
        [
            &self.id,
            &self.title,
            &self.user_story,
            &self.details,
            &self.verification,
        ]
    }
}
