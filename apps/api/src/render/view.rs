//! Presentation view model: the decisions a CV layout needs, resolved from a `Document`.
//!
//! Sidebar: name, headline, contact lines, pulled-out summary.
//! Main column: one block per renderable body section, in document order.
//! When the parser found no sections at all, the raw text is shown as-is.

use serde::{Deserialize, Serialize};

use crate::outline::models::{
    ContactInfo, Document, EducationItem, ExperienceItem, SectionItems, SectionPayload,
    StructuredSection, PLACEHOLDER_NAME,
};
use crate::render::emphasis::{emphasize, TextSpan};

/// Characters of raw content shown for a section that could not be structured.
pub const UNSTRUCTURED_PREVIEW_CHARS: usize = 100;

const OUTLINE_HEADLINE: &str = "CV Outline";
const RESUME_HEADLINE: &str = "Resume";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvView {
    pub header: HeaderView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryView>,
    pub sections: Vec<SectionView>,
    /// Whole input as prose, set only when no section was recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Vec<TextSpan>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    pub name: String,
    pub headline: String,
    pub contacts: Vec<ContactLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Phone,
    Email,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub title: String,
    pub text: Vec<TextSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub id: String,
    pub heading_id: String,
    pub title: String,
    pub block: SectionBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBlock {
    Prose { text: Vec<TextSpan> },
    Bullets { items: Vec<Vec<TextSpan>> },
    Groups { groups: Vec<GroupView> },
    Entries { cards: Vec<EntryCard> },
    /// Raw body text of a section that produced no structured payload.
    Raw { text: Vec<TextSpan> },
    Unstructured { preview: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupView {
    pub title: Vec<TextSpan>,
    pub items: Vec<Vec<TextSpan>>,
}

/// One experience or education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCard {
    /// Job/project title or degree.
    pub heading: Option<Vec<TextSpan>>,
    /// "Company, Location" or "Institution, Location".
    pub organisation: Option<Vec<TextSpan>>,
    pub dates: Option<Vec<TextSpan>>,
    /// Field of study (education only).
    pub detail: Option<Vec<TextSpan>>,
    pub bullets: Vec<Vec<TextSpan>>,
    pub hint: Option<Vec<TextSpan>>,
}

impl CvView {
    pub fn build(doc: &Document) -> Self {
        let fallback = (doc.sections_detected == 0 && !doc.raw_text.trim().is_empty())
            .then(|| emphasize(&doc.raw_text));

        CvView {
            header: header_view(&doc.identity),
            summary: doc.summary.as_ref().map(summary_view),
            sections: doc
                .body
                .iter()
                .filter(|s| s.is_renderable())
                .map(section_view)
                .collect(),
            fallback,
        }
    }
}

fn header_view(identity: &ContactInfo) -> HeaderView {
    let name = match identity.name.trim() {
        "" => PLACEHOLDER_NAME.to_string(),
        name => name.to_string(),
    };
    let headline = match identity.title.trim() {
        "" if name == PLACEHOLDER_NAME => OUTLINE_HEADLINE.to_string(),
        "" => RESUME_HEADLINE.to_string(),
        title => title.to_string(),
    };

    let mut contacts = Vec::new();
    for (kind, value) in [
        (ContactKind::Phone, &identity.phone),
        (ContactKind::Email, &identity.email),
        (ContactKind::Location, &identity.location),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            contacts.push(ContactLine {
                kind,
                text: value.to_string(),
                href: None,
            });
        }
    }
    for (kind, value) in [
        (ContactKind::Linkedin, &identity.linkedin),
        (ContactKind::Website, &identity.website),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            contacts.push(link_line(kind, value));
        }
    }

    HeaderView {
        name,
        headline,
        contacts,
    }
}

/// `linkedin.com/in/jane` → href `https://linkedin.com/in/jane`, text unchanged.
fn link_line(kind: ContactKind, url: &str) -> ContactLine {
    let href = if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    let text = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    ContactLine {
        kind,
        text: text.to_string(),
        href: Some(href),
    }
}

fn summary_view(section: &StructuredSection) -> SummaryView {
    let text = match &section.payload {
        SectionPayload::Paragraph(p) => emphasize(p),
        _ => Vec::new(),
    };
    SummaryView {
        title: section.cleaned_title().to_string(),
        text,
    }
}

fn section_view(section: &StructuredSection) -> SectionView {
    SectionView {
        id: section.section.id.clone(),
        heading_id: format!("{}-heading", section.section.id),
        title: section.cleaned_title().to_string(),
        block: section_block(section),
    }
}

fn section_block(section: &StructuredSection) -> SectionBlock {
    match &section.payload {
        SectionPayload::Paragraph(text) if !text.is_empty() => SectionBlock::Prose {
            text: emphasize(text),
        },
        SectionPayload::ListItems(items) if !items.is_empty() => SectionBlock::Bullets {
            items: items.iter().map(|i| emphasize(i)).collect(),
        },
        SectionPayload::SubSections(groups) if !groups.is_empty() => SectionBlock::Groups {
            groups: groups
                .iter()
                .map(|g| GroupView {
                    title: emphasize(&g.title),
                    items: g.skills.iter().map(|s| emphasize(s)).collect(),
                })
                .collect(),
        },
        SectionPayload::Items(items) if !items.is_empty() => SectionBlock::Entries {
            cards: match items {
                SectionItems::Experience(items) => items.iter().map(experience_card).collect(),
                SectionItems::Education(items) => items.iter().map(education_card).collect(),
            },
        },
        _ => {
            let raw = section.raw_content();
            match raw.trim() {
                "" => SectionBlock::Unstructured {
                    preview: raw.chars().take(UNSTRUCTURED_PREVIEW_CHARS).collect(),
                },
                trimmed => SectionBlock::Raw {
                    text: emphasize(trimmed),
                },
            }
        }
    }
}

fn experience_card(item: &ExperienceItem) -> EntryCard {
    EntryCard {
        heading: item.title.as_deref().map(emphasize),
        organisation: organisation(item.company.as_deref(), item.location.as_deref()),
        dates: item.dates.as_deref().map(emphasize),
        detail: None,
        bullets: item.descriptions.iter().map(|d| emphasize(d)).collect(),
        hint: item.placeholder.as_deref().map(emphasize),
    }
}

fn education_card(item: &EducationItem) -> EntryCard {
    EntryCard {
        heading: item.degree.as_deref().map(emphasize),
        organisation: organisation(item.institution.as_deref(), item.location.as_deref()),
        dates: item.dates.as_deref().map(emphasize),
        detail: item.field_of_study.as_deref().map(emphasize),
        bullets: item.descriptions.iter().map(|d| emphasize(d)).collect(),
        hint: item.placeholder.as_deref().map(emphasize),
    }
}

/// Location is only shown next to an organisation name.
fn organisation(name: Option<&str>, location: Option<&str>) -> Option<Vec<TextSpan>> {
    let name = name?;
    Some(match location {
        Some(location) => emphasize(&format!("{name}, {location}")),
        None => emphasize(name),
    })
}
