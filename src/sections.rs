//! Label-delimited section splitting.
//!
//! The text of a requirement is one blob with optional labelled parts:
//!
//! ```text
//! As a groomer I want ... Conversation: ... Confirmation: ... Dependencies: ...
//! ```
//!
//! Splitting walks the labels in order. At each label the text carried so
//! far is cut at the first case-insensitive match: the part before becomes
//! the current section and the part after is carried to the next label.
//! A missing label leaves the current section with everything and all later
//! sections empty.

use crate::config::PipelineConfig;
use regex::Regex;
use std::sync::LazyLock;

static CONVERSATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Conversation:").expect("Invalid regex pattern"));
static CONFIRMATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Confirmation:").expect("Invalid regex pattern"));
static DEPENDENCIES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Dependencies:").expect("Invalid regex pattern"));

/// Section labels in the order they are expected to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Conversation,
    Confirmation,
    Dependencies,
}

impl Label {
    /// Labels in split order.
    pub const ORDER: [Label; 3] = [Label::Conversation, Label::Confirmation, Label::Dependencies];

    pub fn marker(self) -> &'static str {
        match self {
            Label::Conversation => "Conversation:",
            Label::Confirmation => "Confirmation:",
            Label::Dependencies => "Dependencies:",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Label::Conversation => &*CONVERSATION_PATTERN,
            Label::Confirmation => &*CONFIRMATION_PATTERN,
            Label::Dependencies => &*DEPENDENCIES_PATTERN,
        }
    }
}

/// Cut `text` at the first case-insensitive occurrence of `label`.
///
/// Returns `(before, after)`; `after` is empty when the label is absent.
pub fn split_at_label(text: &str, label: Label) -> (&str, &str) {
    match label.pattern().find(text) {
        Some(m) => (&text[..m.start()], &text[m.end()..]),
        None => (text, ""),
    }
}

/// The parts of a requirement blob that reach the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    /// Card content with boilerplate removed, trimmed.
    pub card: String,
    /// Raw conversation text, trimmed.
    pub conversation: String,
    /// Raw confirmation text, trimmed.
    pub confirmation: String,
}

/// Split a requirement blob into card, conversation, and confirmation.
///
/// Anything after `Dependencies:` is discarded.
pub fn split_sections(blob: &str, config: &PipelineConfig) -> Sections {
    let mut rest = blob;
    let [card, conversation, confirmation] = Label::ORDER.map(|label| {
        let (before, after) = split_at_label(rest, label);
        rest = after;
        before
    });

    Sections {
        card: clean_card(card, &config.strip_patterns),
        conversation: conversation.trim().to_string(),
        confirmation: confirmation.trim().to_string(),
    }
}

/// Remove boilerplate patterns, in order, then trim.
fn clean_card(card: &str, patterns: &[String]) -> String {
    let mut cleaned = card.to_string();
    for pattern in patterns.iter().filter(|p| !p.is_empty()) {
        cleaned = cleaned.replace(pattern.as_str(), "");
    }
    cleaned.trim().to_string()
}
