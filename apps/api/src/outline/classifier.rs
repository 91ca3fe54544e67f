//! Section classifier: picks a sub-parser for each raw section by its cleaned title.
//!
//! Rules are tried top to bottom and the first whose keyword appears in the
//! lower-cased title wins, so "Technical Skills Summary" is a summary, not skills.

use tracing::debug;

use crate::outline::contact::{parse_contact_lines, resolve_identity};
use crate::outline::entries::{structure_education, structure_experience};
use crate::outline::models::{
    IdentityOverride, RawSection, SectionCategory, SectionPayload, StructuredSection,
};
use crate::outline::skills::structure_skills;
use crate::outline::text::{list_items, paragraph};

/// Inputs shared by every sub-parser in a single parse call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyContext<'a> {
    pub identity: Option<&'a IdentityOverride>,
    pub document_title: Option<&'a str>,
}

type Structurer = fn(&[String], &ClassifyContext<'_>) -> SectionPayload;

pub struct SectionRule {
    pub category: SectionCategory,
    pub keywords: &'static [&'static str],
    structure: Structurer,
}

/// Keywords that promote a section to the summary slot.
pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "personal profile"];

pub const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        category: SectionCategory::Contact,
        keywords: &["contact information"],
        structure: structure_contact,
    },
    SectionRule {
        category: SectionCategory::Summary,
        keywords: SUMMARY_KEYWORDS,
        structure: |lines, _| SectionPayload::Paragraph(paragraph(lines)),
    },
    SectionRule {
        category: SectionCategory::Skills,
        keywords: &["skills"],
        structure: |lines, _| structure_skills(lines),
    },
    SectionRule {
        category: SectionCategory::Experience,
        keywords: &["experience", "projects"],
        structure: |lines, _| structure_experience(lines),
    },
    SectionRule {
        category: SectionCategory::Education,
        keywords: &["education"],
        structure: |lines, _| structure_education(lines),
    },
    SectionRule {
        category: SectionCategory::Note,
        keywords: &["note"],
        structure: |lines, _| SectionPayload::Paragraph(lines.join("\n").trim().to_string()),
    },
];

impl SectionRule {
    pub fn matches(&self, lower_title: &str) -> bool {
        self.keywords.iter().any(|k| lower_title.contains(k))
    }
}

pub fn title_has_any(title: &str, keywords: &[&str]) -> bool {
    let lower = title.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

fn find_rule(cleaned_title: &str) -> Option<&'static SectionRule> {
    let lower = cleaned_title.to_lowercase();
    SECTION_RULES.iter().find(|rule| rule.matches(&lower))
}

/// Runs the matching sub-parser. Pure in `cleaned_title` and `body_lines`.
pub fn structure_section(section: RawSection, ctx: &ClassifyContext<'_>) -> StructuredSection {
    let (category, payload) = match find_rule(&section.cleaned_title) {
        Some(rule) => (rule.category, (rule.structure)(&section.body_lines, ctx)),
        None => (
            SectionCategory::List,
            SectionPayload::ListItems(list_items(&section.body_lines)),
        ),
    };
    debug!("Section '{}' classified as {:?}", section.id, category);
    StructuredSection {
        section,
        category,
        payload,
    }
}

fn structure_contact(lines: &[String], ctx: &ClassifyContext<'_>) -> SectionPayload {
    SectionPayload::Contact(resolve_identity(
        parse_contact_lines(lines),
        ctx.identity,
        ctx.document_title,
    ))
}
