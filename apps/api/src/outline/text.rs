//! Line-level helpers shared by the section sub-parsers.

use std::sync::LazyLock;

use regex::Regex;

/// One leading bullet character (or whitespace) plus the whitespace after it.
static BULLET_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s*-]\s*").unwrap());

/// Removes a single leading bullet marker. `"* Python"` → `"Python"`, `"  * Go"` → `"* Go"`.
pub fn strip_bullet(line: &str) -> &str {
    match BULLET_MARKER_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

pub fn starts_with_bullet(line: &str) -> bool {
    line.starts_with('*') || line.starts_with('-')
}

/// Case-insensitive ASCII prefix match returning the remainder.
pub fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &line[prefix.len()..])
}

/// Bullet-stripped, trimmed, non-blank lines. Used by the flat list shape.
pub fn list_items(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| strip_bullet(l).trim())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Prose block: bullet markers removed line by line, then the block trimmed.
pub fn paragraph(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| strip_bullet(l))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Non-empty trimmed value, `None` for blanks.
pub fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_bullet_variants() {
        assert_eq!(strip_bullet("* Python"), "Python");
        assert_eq!(strip_bullet("- Go"), "Go");
        assert_eq!(strip_bullet("Rust"), "Rust");
        assert_eq!(strip_bullet("  * nested"), "* nested");
        assert_eq!(strip_bullet("**Bold:**"), "*Bold:**");
    }

    #[test]
    fn test_strip_prefix_ci() {
        assert_eq!(strip_prefix_ci("Job Title: Dev", "job title:"), Some(" Dev"));
        assert_eq!(strip_prefix_ci("Job", "job title:"), None);
        assert_eq!(strip_prefix_ci("Jöb Title: x", "job title:"), None);
    }

    #[test]
    fn test_list_items_drops_blanks() {
        let items = list_items(&lines(&["* AWS Certified", "", "  ", "- CKA"]));
        assert_eq!(items, vec!["AWS Certified", "CKA"]);
    }

    #[test]
    fn test_paragraph_strips_bullets_and_trims() {
        let text = paragraph(&lines(&["", "* Seasoned engineer", "with 8 years", ""]));
        assert_eq!(text, "Seasoned engineer\nwith 8 years");
    }

    #[test]
    fn test_paragraph_whitespace_only_is_empty() {
        assert_eq!(paragraph(&lines(&["  ", ""])), "");
    }
}
