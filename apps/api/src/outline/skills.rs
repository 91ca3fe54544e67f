//! Skills section: groups skills under bolded `**Category:**` sub-headers.

use std::sync::LazyLock;

use regex::Regex;

use crate::outline::models::{SectionPayload, SkillSubSection};
use crate::outline::text::list_items;

static SUB_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*\*(.+?):\*\*\s*$").unwrap());

/// Category opened when skills appear before any sub-header.
pub const DEFAULT_SKILL_CATEGORY: &str = "Key Skills";

pub fn structure_skills(lines: &[String]) -> SectionPayload {
    let mut groups: Vec<SkillSubSection> = Vec::new();
    let mut current: Option<SkillSubSection> = None;

    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        if let Some(caps) = SUB_HEADER_RE.captures(line) {
            groups.extend(current.take());
            current = Some(SkillSubSection {
                title: caps[1].trim().to_string(),
                skills: Vec::new(),
            });
            continue;
        }

        let skill = match line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
            Some(rest) => rest.trim(),
            None => line,
        };
        if skill.is_empty() {
            continue;
        }
        current
            .get_or_insert_with(|| SkillSubSection {
                title: DEFAULT_SKILL_CATEGORY.to_string(),
                skills: Vec::new(),
            })
            .skills
            .push(skill.to_string());
    }
    groups.extend(current);

    if groups.is_empty() {
        SectionPayload::ListItems(list_items(lines))
    } else {
        SectionPayload::SubSections(groups)
    }
}
