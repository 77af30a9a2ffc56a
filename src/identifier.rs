//! Identifier decomposition.
//!
//! The first column of an export row packs a module code, a story number,
//! and a title into one dash-separated string:
//!
//! ```text
//! GRM-USC 2-Create grooming schedule
//! ```
//!
//! Decomposition is positional and total. Inputs that do not have the full
//! three-part shape still produce an [`Identifier`]; their [`SortKey`]
//! falls back to sentinel values so they sort after well-formed rows.

use std::fmt;

/// Sort number used when no number can be extracted.
pub const UNNUMBERED: u64 = 9999;

/// Display form of [`SortGroup::Unassigned`].
pub const UNASSIGNED_GROUP: &str = "ZZZ";

/// Dash variants normalized to ASCII `-` before splitting (en dash, em dash).
const DASH_VARIANTS: [char; 2] = ['\u{2013}', '\u{2014}'];

/// Primary sort key: the module code in front of the first dash.
///
/// Variant order is significant: `Unassigned` sorts after every module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortGroup {
    /// A module code such as `GRM` or `BRD`.
    Module(String),
    /// The identifier had no dash at all.
    Unassigned,
}

impl SortGroup {
    pub fn as_str(&self) -> &str {
        match self {
            SortGroup::Module(code) => code,
            SortGroup::Unassigned => UNASSIGNED_GROUP,
        }
    }
}

impl fmt::Display for SortGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering key of a record: group first, then number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortKey {
    pub group: SortGroup,
    pub number: u64,
}

impl SortKey {
    pub fn new(group: SortGroup, number: u64) -> Self {
        Self { group, number }
    }

    /// Key for identifiers that could not be decomposed.
    pub fn unassigned() -> Self {
        Self::new(SortGroup::Unassigned, UNNUMBERED)
    }
}

/// Display fields and sort key extracted from a raw identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Display id, e.g. `GRM - USC 2`.
    pub id: String,
    /// Display title; empty when the identifier has no title part.
    pub title: String,
    pub key: SortKey,
}

/// Decompose a raw identifier string.
///
/// - three or more tokens: `id` is `"<t0> - <t1>"`, the title is the rest
///   rejoined with `-`, and a missing number in `t1` becomes `0`
/// - exactly two tokens: `id` is the raw input, no title, and a missing
///   number becomes [`UNNUMBERED`]
/// - fewer tokens: `id` is the raw input with [`SortKey::unassigned`]
pub fn decompose(raw: &str) -> Identifier {
    let normalized: String = raw
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect();
    let tokens: Vec<&str> = normalized.split('-').collect();

    match tokens.as_slice() {
        [group, number, title @ ..] if !title.is_empty() => Identifier {
            id: format!("{} - {}", group.trim(), number.trim()),
            title: title.join("-").trim().to_string(),
            key: SortKey::new(
                SortGroup::Module(group.trim().to_string()),
                first_number(number).unwrap_or(0),
            ),
        },
        [group, number] => Identifier {
            id: raw.to_string(),
            title: String::new(),
            key: SortKey::new(
                SortGroup::Module(group.trim().to_string()),
                first_number(number).unwrap_or(UNNUMBERED),
            ),
        },
        _ => Identifier {
            id: raw.to_string(),
            title: String::new(),
            key: SortKey::unassigned(),
        },
    }
}

/// First run of ASCII digits in `s`, saturating at `u64::MAX`.
fn first_number(s: &str) -> Option<u64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits = &s[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    Some(digits[..end].parse().unwrap_or(u64::MAX))
}
