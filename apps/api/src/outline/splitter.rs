//! Section splitter: partitions generated CV text into `(header, body)` pairs.
//!
//! A header is a whole line holding a bolded label from a closed vocabulary,
//! optionally numbered (`3. **Skills:**`). Lines before the first header are
//! discarded, except that a bolded first line outside the vocabulary is kept as
//! the candidate document title.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::outline::models::RawSection;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:\d+\.\s*)?\*\*(?:Contact Information|Summary/Objective|Personal Profile|Summary|Objective|Skills|Technical Skills|Software Skills|Work Experience|Experience|Education|Projects|Certifications/Licenses|Certifications|Licenses|Awards/Recognitions|Awards|Languages|Note)\b:?\*\*:?\s*$",
    )
    .unwrap()
});
static BOLD_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*\*(.+?)\*\*\s*$").unwrap());
static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());
static SLUG_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s/]+").unwrap());

/// Splitter output: the ordered raw sections and the optional document title line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutput {
    pub sections: Vec<RawSection>,
    pub document_title: Option<String>,
}

pub fn is_header_line(line: &str) -> bool {
    HEADER_RE.is_match(line.trim())
}

/// `"2. **Summary/Objective:**"` → `"Summary/Objective"`.
pub fn clean_title(header: &str) -> String {
    let without_ordinal = ORDINAL_RE.replace(header, "");
    let without_bold = without_ordinal.replace("**", "");
    let trimmed = without_bold.trim();
    trimmed.strip_suffix(':').unwrap_or(trimmed).trim().to_string()
}

/// `"Summary/Objective"` → `"summary-objective"`.
pub fn slugify(cleaned_title: &str) -> String {
    SLUG_SEPARATOR_RE
        .replace_all(&cleaned_title.to_lowercase(), "-")
        .into_owned()
}

/// Splits the full CV text. Never fails; unknown lines stay with the current section.
pub fn split_sections(text: &str) -> SplitOutput {
    if text.trim().is_empty() {
        return SplitOutput::default();
    }

    let document_title = text.lines().next().and_then(document_title_candidate);

    let mut sections: Vec<RawSection> = Vec::new();
    let mut slugs = SlugRegistry::default();
    let mut current_header: Option<String> = None;
    let mut current_body: Vec<String> = Vec::new();

    for line in text.lines() {
        if is_header_line(line) {
            if let Some(header) = current_header.take() {
                sections.push(build_section(
                    header,
                    std::mem::take(&mut current_body),
                    &mut slugs,
                ));
            }
            current_header = Some(line.trim().to_string());
        } else if current_header.is_some() {
            current_body.push(line.to_string());
        }
    }

    if let Some(header) = current_header {
        sections.push(build_section(header, current_body, &mut slugs));
    }

    SplitOutput {
        sections,
        document_title,
    }
}

fn document_title_candidate(first_line: &str) -> Option<String> {
    if is_header_line(first_line) || !BOLD_LINE_RE.is_match(first_line) {
        return None;
    }
    let title = first_line.replace("**", "");
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn build_section(raw_header: String, body_lines: Vec<String>, slugs: &mut SlugRegistry) -> RawSection {
    let cleaned_title = clean_title(&raw_header);
    let id = slugs.claim(slugify(&cleaned_title));
    RawSection {
        raw_header,
        cleaned_title,
        id,
        body_lines,
    }
}

/// Hands out unique ids: the first claimant keeps the bare slug, repeats get `-2`, `-3`, ...
#[derive(Debug, Default)]
struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    fn claim(&mut self, slug: String) -> String {
        let count = self.seen.entry(slug.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            return slug;
        }
        let mut n = *count;
        loop {
            let candidate = format!("{slug}-{n}");
            if !self.seen.contains_key(&candidate) {
                self.seen.insert(candidate.clone(), 1);
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "**Senior Data Engineer CV**\n\
        Here is your outline:\n\
        1. **Contact Information:**\n\
        * Phone: 555-0100\n\
        \n\
        2. **Summary/Objective:**\n\
        Builder of pipelines.\n\
        3. **Skills:**\n\
        * Python\n";

    #[test]
    fn test_header_detection_vocabulary() {
        assert!(is_header_line("1. **Contact Information:**"));
        assert!(is_header_line("**Skills**"));
        assert!(is_header_line("  4. **work experience**  "));
        assert!(is_header_line("**Education**:"));
        assert!(is_header_line("7. **Certifications/Licenses:**"));
        assert!(!is_header_line("**Hobbies:**"));
        assert!(!is_header_line("1. **Skills:** Python, Go"));
        assert!(!is_header_line("Skills:"));
        assert!(!is_header_line("6. **Projects (Optional but Recommended):**"));
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("2. **Summary/Objective:**"), "Summary/Objective");
        assert_eq!(clean_title("**Skills**:"), "Skills");
        assert_eq!(clean_title("**Work Experience**"), "Work Experience");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Summary/Objective"), "summary-objective");
        assert_eq!(slugify("Work  Experience"), "work-experience");
        assert_eq!(slugify("Certifications / Licenses"), "certifications-licenses");
    }

    #[test]
    fn test_split_sample() {
        let out = split_sections(SAMPLE);
        assert_eq!(out.document_title.as_deref(), Some("Senior Data Engineer CV"));
        let titles: Vec<_> = out.sections.iter().map(|s| s.cleaned_title.as_str()).collect();
        assert_eq!(titles, vec!["Contact Information", "Summary/Objective", "Skills"]);
        assert_eq!(out.sections[0].body_lines, vec!["* Phone: 555-0100", ""]);
        assert_eq!(out.sections[1].id, "summary-objective");
    }

    #[test]
    fn test_preamble_discarded() {
        let out = split_sections("intro line\nanother\n**Skills**\n* Go");
        assert_eq!(out.document_title, None);
        assert_eq!(out.sections.len(), 1);
        assert_eq!(out.sections[0].body_lines, vec!["* Go"]);
    }

    #[test]
    fn test_first_line_header_is_not_title() {
        let out = split_sections("**Skills**\n* Go");
        assert_eq!(out.document_title, None);
        assert_eq!(out.sections.len(), 1);
    }

    #[test]
    fn test_only_first_line_is_title_candidate() {
        let out = split_sections("\n**Jane Doe**\n**Skills**\n* Go");
        assert_eq!(out.document_title, None);
    }

    #[test]
    fn test_unrecognized_header_absorbed() {
        let out = split_sections("**Skills**\n* Go\n**Hobbies:**\n* Chess");
        assert_eq!(out.sections.len(), 1);
        assert_eq!(out.sections[0].body_lines, vec!["* Go", "**Hobbies:**", "* Chess"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(split_sections(""), SplitOutput::default());
        assert_eq!(split_sections("  \n\n "), SplitOutput::default());
    }

    #[test]
    fn test_no_headers() {
        let out = split_sections("just some plain text with no structure");
        assert!(out.sections.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_suffixed() {
        let out = split_sections("**Skills**\na\n**Skills:**\nb\n**Skills**\nc");
        let ids: Vec<_> = out.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["skills", "skills-2", "skills-3"]);
    }

    #[test]
    fn test_every_header_appears_once_in_order() {
        let text = "**Summary**\nx\n**Note**\n**Skills**\n**Note**\ny";
        let out = split_sections(text);
        let headers: Vec<_> = out.sections.iter().map(|s| s.raw_header.as_str()).collect();
        let expected: Vec<_> = text.lines().filter(|l| is_header_line(l)).collect();
        assert_eq!(headers, expected);
    }

    #[test]
    fn test_crlf_input() {
        let out = split_sections("**Skills**\r\n* Go\r\n");
        assert_eq!(out.sections[0].body_lines, vec!["* Go"]);
    }
}
