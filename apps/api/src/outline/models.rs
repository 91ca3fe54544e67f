//! CV outline data contract: the shapes produced by the parser and consumed by `render`.

use serde::{Deserialize, Serialize};

/// Display name used when neither the override nor the document supplies one.
pub const PLACEHOLDER_NAME: &str = "Your Name";
/// Headline used when neither the override nor the document supplies one.
pub const PLACEHOLDER_TITLE: &str = "Professional Title";

// ────────────────────────────────────────────────────────────────────────────
// Splitter output
// ────────────────────────────────────────────────────────────────────────────

/// A recognized header plus the lines that followed it, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    /// The header line as it appeared in the input, trimmed.
    pub raw_header: String,
    /// Header with ordinal, bold markup and trailing colon removed.
    pub cleaned_title: String,
    /// Slug derived from `cleaned_title`, unique within one document.
    pub id: String,
    /// Body lines in input order. Blank lines are kept.
    pub body_lines: Vec<String>,
}

impl RawSection {
    pub fn raw_content(&self) -> String {
        self.body_lines.join("\n")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typed payloads
// ────────────────────────────────────────────────────────────────────────────

/// Identity block shown in the header/sidebar of a rendered CV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Identity fields supplied by the caller (e.g. the signed-in user's profile).
/// Any field present here wins over whatever the generated text says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityOverride {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl IdentityOverride {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    /// Overwrites every contact field this override supplies.
    pub fn apply_to(&self, contact: &mut ContactInfo) {
        if let Some(name) = self.name() {
            contact.name = name.to_string();
        }
        if let Some(title) = self.title() {
            contact.title = title.to_string();
        }
        for (value, slot) in [
            (&self.email, &mut contact.email),
            (&self.phone, &mut contact.phone),
            (&self.linkedin, &mut contact.linkedin),
            (&self.website, &mut contact.website),
            (&self.location, &mut contact.location),
        ] {
            if let Some(v) = present(value) {
                *slot = Some(v.to_string());
            }
        }
    }
}

/// Blank strings are treated the same as a missing field.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A named group of skills, e.g. "Programming Languages".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSubSection {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    /// Writing guidance carried alongside (not inside) the achievement bullets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Repeated entry cards. One section never mixes experience and education entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entry_type", content = "entries", rename_all = "snake_case")]
pub enum SectionItems {
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
}

impl SectionItems {
    pub fn len(&self) -> usize {
        match self {
            SectionItems::Experience(items) => items.len(),
            SectionItems::Education(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which sub-parser a section was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionCategory {
    Contact,
    Summary,
    Skills,
    Experience,
    Education,
    Note,
    List,
}

/// The single typed payload of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SectionPayload {
    Contact(ContactInfo),
    Paragraph(String),
    ListItems(Vec<String>),
    SubSections(Vec<SkillSubSection>),
    Items(SectionItems),
}

impl SectionPayload {
    /// Whether the payload holds anything worth displaying.
    pub fn has_content(&self) -> bool {
        match self {
            SectionPayload::Contact(_) => true,
            SectionPayload::Paragraph(text) => !text.is_empty(),
            SectionPayload::ListItems(items) => !items.is_empty(),
            SectionPayload::SubSections(groups) => !groups.is_empty(),
            SectionPayload::Items(items) => !items.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredSection {
    #[serde(flatten)]
    pub section: RawSection,
    pub category: SectionCategory,
    pub payload: SectionPayload,
}

impl StructuredSection {
    pub fn cleaned_title(&self) -> &str {
        &self.section.cleaned_title
    }

    pub fn raw_content(&self) -> String {
        self.section.raw_content()
    }

    /// A section is worth a heading only if it has a title and something under it,
    /// either a structured payload or raw text the renderer can fall back to.
    pub fn is_renderable(&self) -> bool {
        !self.section.cleaned_title.is_empty()
            && (self.payload.has_content()
                || self.section.body_lines.iter().any(|l| !l.trim().is_empty()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembled document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub identity: ContactInfo,
    /// Bolded first line of the input when it is not itself a section header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<StructuredSection>,
    pub body: Vec<StructuredSection>,
    /// Number of sections the splitter recognized, including promoted ones.
    pub sections_detected: usize,
    /// The untouched input, kept for the no-structure display fallback.
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, body: &[&str], payload: SectionPayload) -> StructuredSection {
        StructuredSection {
            section: RawSection {
                raw_header: format!("**{title}**"),
                cleaned_title: title.to_string(),
                id: title.to_lowercase(),
                body_lines: body.iter().map(|s| s.to_string()).collect(),
            },
            category: SectionCategory::List,
            payload,
        }
    }

    #[test]
    fn test_override_apply_ignores_blank_fields() {
        let mut contact = ContactInfo {
            name: "Parsed".to_string(),
            title: "Engineer".to_string(),
            email: Some("parsed@x.com".to_string()),
            ..Default::default()
        };
        let ov = IdentityOverride {
            name: Some("  ".to_string()),
            email: Some("jane@x.com".to_string()),
            ..Default::default()
        };
        ov.apply_to(&mut contact);
        assert_eq!(contact.name, "Parsed");
        assert_eq!(contact.email.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn test_renderable_with_raw_content_only() {
        let s = section("Languages", &["", "English"], SectionPayload::ListItems(vec![]));
        assert!(s.is_renderable());
    }

    #[test]
    fn test_not_renderable_when_empty() {
        let s = section("Awards", &["", "  "], SectionPayload::ListItems(vec![]));
        assert!(!s.is_renderable());
    }

    #[test]
    fn test_not_renderable_without_title() {
        let s = section("", &["text"], SectionPayload::Paragraph("text".to_string()));
        assert!(!s.is_renderable());
    }

    #[test]
    fn test_payload_serde_tagging() {
        let payload = SectionPayload::ListItems(vec!["AWS Certified".to_string()]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "list_items");
        assert_eq!(json["data"][0], "AWS Certified");
    }

    #[test]
    fn test_items_serde_tagging() {
        let payload = SectionPayload::Items(SectionItems::Education(vec![EducationItem {
            degree: Some("BSc".to_string()),
            ..Default::default()
        }]));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "items");
        assert_eq!(json["data"]["entry_type"], "education");
        assert_eq!(json["data"]["entries"][0]["degree"], "BSc");
        assert!(json["data"]["entries"][0].get("institution").is_none());
    }
}
