//! Contact block parsing and identity resolution.

use std::sync::LazyLock;

use regex::Regex;

use crate::outline::models::{ContactInfo, IdentityOverride, PLACEHOLDER_NAME, PLACEHOLDER_TITLE};
use crate::outline::text::{non_blank, strip_bullet, strip_prefix_ci};

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)phone(?: number)?:\s*").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)email(?: address)?:\s*").unwrap());
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin(?: profile url)?:\s*").unwrap());
static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:portfolio|website)(?: url)?(?: \(if applicable\))?:\s*").unwrap()
});
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(?:location|address):\s*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactField {
    Phone,
    Email,
    Linkedin,
    Website,
    Location,
    Name,
    Title,
}

/// Fields read out of the contact block before defaults and overrides are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContact {
    pub name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

/// Reads `Phone:`, `Email:`, `LinkedIn:` ... lines. Lines matching no field are ignored.
pub fn parse_contact_lines(lines: &[String]) -> ParsedContact {
    let mut parsed = ParsedContact::default();

    for item in lines.iter().map(|l| strip_bullet(l).trim()).filter(|l| !l.is_empty()) {
        let Some((field, value)) = match_field(item) else {
            continue;
        };
        let value = non_blank(&value);
        match field {
            ContactField::Phone => parsed.phone = value,
            ContactField::Email => parsed.email = value,
            ContactField::Linkedin => parsed.linkedin = value,
            ContactField::Website => parsed.website = value,
            ContactField::Location => parsed.location = value,
            ContactField::Name => parsed.name = value,
            ContactField::Title => parsed.title = value,
        }
    }

    parsed
}

/// Keyword checks run in a fixed order: a line mentioning both "email" and
/// "linkedin" is an email line.
fn match_field(item: &str) -> Option<(ContactField, String)> {
    let lower = item.to_lowercase();

    if lower.contains("phone") {
        Some((ContactField::Phone, strip_label(&PHONE_RE, item)))
    } else if lower.contains("email") {
        Some((ContactField::Email, strip_label(&EMAIL_RE, item)))
    } else if lower.contains("linkedin") {
        Some((ContactField::Linkedin, strip_label(&LINKEDIN_RE, item)))
    } else if lower.contains("portfolio") || lower.contains("website") {
        Some((ContactField::Website, strip_label(&WEBSITE_RE, item)))
    } else if lower.contains("location") || lower.contains("address") {
        Some((ContactField::Location, strip_label(&LOCATION_RE, item)))
    } else if let Some(rest) = strip_prefix_ci(item, "name:") {
        Some((ContactField::Name, rest.to_string()))
    } else {
        strip_prefix_ci(item, "title:").map(|rest| (ContactField::Title, rest.to_string()))
    }
}

fn strip_label(label: &Regex, item: &str) -> String {
    label.replacen(item, 1, "").trim().to_string()
}

/// Builds the final identity.
///
/// Name: override → parsed `Name:` → document title → "Your Name".
/// Title: override → parsed `Title:` → document title (if it is not the name) → "Professional Title".
/// Every other override field replaces its parsed counterpart.
pub fn resolve_identity(
    parsed: ParsedContact,
    identity: Option<&IdentityOverride>,
    document_title: Option<&str>,
) -> ContactInfo {
    let document_title = document_title.filter(|t| *t != PLACEHOLDER_NAME);

    let name = identity
        .and_then(IdentityOverride::name)
        .map(String::from)
        .or(parsed.name)
        .or_else(|| document_title.map(String::from))
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());

    let title = identity
        .and_then(IdentityOverride::title)
        .map(String::from)
        .or(parsed.title)
        .or_else(|| document_title.filter(|t| *t != name).map(String::from))
        .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

    let mut contact = ContactInfo {
        name,
        title,
        phone: parsed.phone,
        email: parsed.email,
        linkedin: parsed.linkedin,
        website: parsed.website,
        location: parsed.location,
    };
    if let Some(identity) = identity {
        identity.apply_to(&mut contact);
    }
    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_template_fields() {
        let parsed = parse_contact_lines(&lines(&[
            "* Phone Number: (555) 010-0100",
            "* Email Address: jane@x.com",
            "- LinkedIn Profile URL: linkedin.com/in/jane",
            "* Portfolio URL: jane.dev",
            "* Website (if applicable): jane.dev",
            "* Location: Austin, TX",
            "",
        ]));
        assert_eq!(parsed.phone.as_deref(), Some("(555) 010-0100"));
        assert_eq!(parsed.email.as_deref(), Some("jane@x.com"));
        assert_eq!(parsed.linkedin.as_deref(), Some("linkedin.com/in/jane"));
        assert_eq!(parsed.website.as_deref(), Some("jane.dev"));
        assert_eq!(parsed.location.as_deref(), Some("Austin, TX"));
    }

    #[test]
    fn test_address_maps_to_location() {
        let parsed = parse_contact_lines(&lines(&["Address: 1 Main St"]));
        assert_eq!(parsed.location.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn test_unmatched_lines_ignored() {
        let parsed = parse_contact_lines(&lines(&["[Your details here]", "Available on request"]));
        assert_eq!(parsed, ParsedContact::default());
    }

    #[test]
    fn test_name_and_title_lines() {
        let parsed = parse_contact_lines(&lines(&["* Name: Jane Doe", "* Title: Data Engineer"]));
        let contact = resolve_identity(parsed, None, None);
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.title, "Data Engineer");
    }

    #[test]
    fn test_blank_value_is_absent() {
        let parsed = parse_contact_lines(&lines(&["* Phone:", "* Email:   "]));
        assert_eq!(parsed.phone, None);
        assert_eq!(parsed.email, None);
    }

    #[test]
    fn test_placeholder_defaults() {
        let contact = resolve_identity(ParsedContact::default(), None, None);
        assert_eq!(contact.name, PLACEHOLDER_NAME);
        assert_eq!(contact.title, PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_document_title_used_as_name_only() {
        let contact = resolve_identity(ParsedContact::default(), None, Some("Marketing Manager CV"));
        assert_eq!(contact.name, "Marketing Manager CV");
        assert_eq!(contact.title, PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_document_title_used_as_title_when_name_overridden() {
        let ov = IdentityOverride {
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let contact = resolve_identity(ParsedContact::default(), Some(&ov), Some("Marketing Manager"));
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.title, "Marketing Manager");
    }

    #[test]
    fn test_override_precedence() {
        let parsed = parse_contact_lines(&lines(&["* Email: other@y.com", "* Phone: 111", "* Name: Parsed"]));
        let ov = IdentityOverride {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            ..Default::default()
        };
        let contact = resolve_identity(parsed, Some(&ov), None);
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.email.as_deref(), Some("jane@x.com"));
        assert_eq!(contact.phone.as_deref(), Some("111"));
    }
}
