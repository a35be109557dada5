//! Shared text/content utilities: placeholder filtering, cleanup, slugs.

use regex::Regex;
use std::sync::OnceLock;

/// Phrases the backend occasionally leaks from unfinished prompts. Any text
/// containing one of these (case-insensitive) must never reach a rendered
/// report.
const PLACEHOLDER_PHRASES: &[&str] = &[
    "what to verify",
    "what to look for",
    "coming soon",
    "to be determined",
    "tbd",
    "todo",
    "lorem ipsum",
    "placeholder",
    "n/a",
    "xxx",
    "insert text",
];

/// Text shorter than this is treated as junk.
pub const MIN_TEXT_LEN: usize = 20;

/// Fallback sentence substituted for filtered text.
pub const FALLBACK_TEXT: &str = "Analysis details are not available for this section.";

/// True when `text` is substantive: long enough and free of placeholder
/// phrases.
pub fn is_substantive(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_TEXT_LEN {
        return false;
    }
    let lower = trimmed.to_lowercase();
    !PLACEHOLDER_PHRASES.iter().any(|p| lower.contains(p))
}

/// Denylist filter: returns cleaned text, or the fallback sentence when the
/// input is junk. Idempotent: filtering clean text again is a no-op, and the
/// fallback itself passes the filter.
pub fn filter_text(text: &str) -> String {
    // Clean first: collapsing whitespace can drop a text below the length
    // floor, and can surface a placeholder phrase split across a newline.
    let cleaned = clean_whitespace(text);
    if is_substantive(&cleaned) {
        cleaned
    } else {
        FALLBACK_TEXT.to_string()
    }
}

/// Like [`filter_text`] but drops junk instead of substituting, for list
/// items where a fallback entry would be noise.
pub fn filter_optional(text: &str) -> Option<String> {
    let cleaned = clean_whitespace(text);
    is_substantive(&cleaned).then_some(cleaned)
}

/// Collapse runs of whitespace (including newlines the backend embeds) into
/// single spaces and trim.
pub fn clean_whitespace(text: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let ws = WS.get_or_init(|| Regex::new(r"\s+").expect("static regex"));
    ws.replace_all(text.trim(), " ").into_owned()
}

/// Filesystem-safe slug for report filenames: lowercase alphanumeric runs
/// joined by dashes, capped at 40 chars, "article" when nothing survives.
pub fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
        if slug.len() >= 40 {
            break;
        }
    }
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        "article".to_string()
    } else {
        slug
    }
}

/// Truncate on a char boundary, appending an ellipsis when shortened.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_rejects_placeholder_any_case() {
        assert_eq!(filter_text("Here is What To Verify in this article"), FALLBACK_TEXT);
        assert_eq!(filter_text("COMING SOON: more details on sourcing"), FALLBACK_TEXT);
        assert_eq!(filter_text("tbd"), FALLBACK_TEXT);
    }

    #[test]
    fn test_filter_rejects_short_text() {
        assert_eq!(filter_text("Too short."), FALLBACK_TEXT);
        assert_eq!(filter_text("   "), FALLBACK_TEXT);
    }

    #[test]
    fn test_filter_idempotent_on_clean_text() {
        let clean = "The article cites three named primary sources.";
        let once = filter_text(clean);
        assert_eq!(once, clean);
        assert_eq!(filter_text(&once), once);
        // The fallback must survive its own filter too.
        assert_eq!(filter_text(FALLBACK_TEXT), FALLBACK_TEXT);
    }

    #[test]
    fn test_filter_optional_drops_junk() {
        assert_eq!(filter_optional("placeholder text goes here"), None);
        assert_eq!(
            filter_optional("The outlet issued two corrections this year."),
            Some("The outlet issued two corrections this year.".to_string())
        );
    }

    #[test]
    fn test_clean_whitespace() {
        assert_eq!(
            clean_whitespace("  spread \n across\t\tlines  "),
            "spread across lines"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("The Daily Planet"), "the-daily-planet");
        assert_eq!(slugify("news.example.com/politics"), "news-example-com-politics");
        assert_eq!(slugify("???"), "article");
        assert!(slugify(&"long word ".repeat(20)).len() <= 40);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly ten", 11), "exactly ten");
        let cut = truncate_chars("a much longer sentence than allowed", 12);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 12);
    }

    #[test]
    fn test_filter_catches_placeholder_split_by_whitespace() {
        assert_eq!(filter_text("here is what to\n  verify in the text"), FALLBACK_TEXT);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn filter_is_idempotent(input in ".{0,200}") {
                let once = filter_text(&input);
                prop_assert_eq!(filter_text(&once), once.clone());
            }

            #[test]
            fn slugify_is_filename_safe(input in ".{0,100}") {
                let slug = slugify(&input);
                prop_assert!(!slug.is_empty());
                prop_assert!(slug.len() <= 40);
                prop_assert!(slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            }
        }
    }
}
