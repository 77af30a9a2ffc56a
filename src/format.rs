//! Presentation markup for conversation and confirmation text.
//!
//! Table cells cannot hold real newlines, so both transforms inject the
//! configured line-break marker instead.

use crate::config::PipelineConfig;

/// Abbreviation whose periods never end a sentence.
const ABBREVIATION: &str = "e.g.";

/// Turn each verification criterion into its own bulleted line.
///
/// Every occurrence of the criterion keyword (`Test` by default) is
/// replaced by a line break, the bullet, and the bolded keyword. A single
/// line break at the very start is dropped. Blank input yields the
/// configured fallback (`N/A`).
pub fn format_confirmation(text: &str, config: &PipelineConfig) -> String {
    let text = text.trim();
    if text.is_empty() {
        return config.empty_verification.clone();
    }
    if config.criterion_keyword.is_empty() {
        return text.to_string();
    }

    let item = format!("{}{}", config.line_break, config.criterion_marker());
    let formatted = text.replace(config.criterion_keyword.as_str(), &item);
    let formatted = formatted
        .strip_prefix(config.line_break.as_str())
        .unwrap_or(&formatted);
    formatted.trim().to_string()
}

/// Start a new line after every sentence-ending period.
///
/// Periods inside `e.g.` are left alone.
pub fn format_conversation(text: &str, config: &PipelineConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let period_break = format!(".{}", config.line_break);
    text.split(ABBREVIATION)
        .map(|segment| segment.replace('.', &period_break))
        .collect::<Vec<_>>()
        .join(ABBREVIATION)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmation(text: &str) -> String {
        format_confirmation(text, &PipelineConfig::default())
    }

    fn conversation(text: &str) -> String {
        format_conversation(text, &PipelineConfig::default())
    }

    #[test]
    fn test_confirmation_empty_is_na() {
        assert_eq!(confirmation(""), "N/A");
        assert_eq!(confirmation("   "), "N/A");
    }

    #[test]
    fn test_confirmation_single_criterion() {
        assert_eq!(confirmation("Test alerts fire."), "• **Test** alerts fire.");
    }

    #[test]
    fn test_confirmation_multiple_criteria() {
        assert_eq!(
            confirmation("Test alerts fire. Test reminders send."),
            "• **Test** alerts fire. <br>• **Test** reminders send."
        );
    }

    #[test]
    fn test_confirmation_text_before_first_criterion() {
        assert_eq!(
            confirmation("Verify: Test login"),
            "Verify: <br>• **Test** login"
        );
    }

    #[test]
    fn test_confirmation_never_starts_with_break() {
        for input in ["Test", "Test Test", "<br>already", "  Test spaced", "plain", "\nTest"] {
            let out = confirmation(input);
            assert!(!out.starts_with("<br>"), "{input:?} -> {out:?}");
        }
    }

    #[test]
    fn test_confirmation_strips_only_one_leading_break() {
        assert_eq!(confirmation("<br>Test x"), "<br>• **Test** x");
    }

    #[test]
    fn test_confirmation_is_case_sensitive() {
        assert_eq!(confirmation("test lowercase"), "test lowercase");
    }

    #[test]
    fn test_confirmation_custom_markers() {
        let config = PipelineConfig {
            line_break: "\\\\".to_string(),
            bullet: "- ".to_string(),
            criterion_keyword: "Check".to_string(),
            empty_verification: "none".to_string(),
            ..PipelineConfig::default()
        };
        assert_eq!(format_confirmation("Check a Check b", &config), "- **Check** a \\\\- **Check** b");
        assert_eq!(format_confirmation("", &config), "none");
    }

    #[test]
    fn test_conversation_empty() {
        assert_eq!(conversation(""), "");
    }

    #[test]
    fn test_conversation_breaks_after_periods() {
        assert_eq!(
            conversation("Staff need alerts. Owners want texts."),
            "Staff need alerts.<br> Owners want texts.<br>"
        );
    }

    #[test]
    fn test_conversation_preserves_abbreviation() {
        assert_eq!(conversation("e.g. done. more."), "e.g. done.<br> more.<br>");
        assert_eq!(
            conversation("Pets, e.g. dogs, need walks."),
            "Pets, e.g. dogs, need walks.<br>"
        );
    }

    #[test]
    fn test_conversation_trims() {
        assert_eq!(conversation("  no period  "), "no period");
    }
}
