//! Inline `**bold**` markup → typed text spans.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static BOLD_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum TextSpan {
    Plain(String),
    Strong(String),
}

/// Splits `text` into plain and emphasized runs. Runs never span a line break;
/// an unterminated `**` stays in the plain text.
pub fn emphasize(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in BOLD_RUN_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(TextSpan::Plain(text[cursor..whole.start()].to_string()));
        }
        spans.push(TextSpan::Strong(inner.as_str().to_string()));
        cursor = whole.end();
    }
    if cursor < text.len() {
        spans.push(TextSpan::Plain(text[cursor..].to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> TextSpan {
        TextSpan::Plain(s.to_string())
    }

    fn strong(s: &str) -> TextSpan {
        TextSpan::Strong(s.to_string())
    }

    #[test]
    fn test_single_bold_run() {
        assert_eq!(
            emphasize("Built **30%** faster pipelines"),
            vec![plain("Built "), strong("30%"), plain(" faster pipelines")]
        );
    }

    #[test]
    fn test_multiple_runs() {
        assert_eq!(
            emphasize("**Rust** and **Go**"),
            vec![strong("Rust"), plain(" and "), strong("Go")]
        );
    }

    #[test]
    fn test_unterminated_markup_is_literal() {
        assert_eq!(emphasize("Saved **$2M in costs"), vec![plain("Saved **$2M in costs")]);
        assert_eq!(
            emphasize("**a** then **b"),
            vec![strong("a"), plain(" then **b")]
        );
    }

    #[test]
    fn test_empty_markup_is_literal() {
        assert_eq!(emphasize("a****b"), vec![plain("a****b")]);
    }

    #[test]
    fn test_no_run_across_lines() {
        assert_eq!(emphasize("**one\ntwo**"), vec![plain("**one\ntwo**")]);
    }

    #[test]
    fn test_empty_text() {
        assert!(emphasize("").is_empty());
    }

    #[test]
    fn test_span_serde() {
        let json = serde_json::to_value(strong("30%")).unwrap();
        assert_eq!(json["style"], "strong");
        assert_eq!(json["text"], "30%");
    }
}
