//! Document assembler: promotes the contact and summary sections to their own slots.

use crate::outline::classifier::{title_has_any, ClassifyContext, SUMMARY_KEYWORDS};
use crate::outline::contact::{resolve_identity, ParsedContact};
use crate::outline::models::{Document, SectionPayload, StructuredSection};

pub fn assemble(sections: Vec<StructuredSection>, ctx: &ClassifyContext<'_>, raw_text: &str) -> Document {
    let sections_detected = sections.len();
    let contact_idx = sections
        .iter()
        .position(|s| matches!(s.payload, SectionPayload::Contact(_)));
    let summary_idx = sections
        .iter()
        .position(|s| title_has_any(s.cleaned_title(), SUMMARY_KEYWORDS));

    let mut identity = None;
    let mut summary = None;
    let mut body = Vec::with_capacity(sections.len());

    for (idx, section) in sections.into_iter().enumerate() {
        if Some(idx) == contact_idx {
            if let SectionPayload::Contact(contact) = &section.payload {
                identity = Some(contact.clone());
            }
        }
        if Some(idx) == summary_idx {
            summary = Some(section);
        } else if Some(idx) != contact_idx && !section.cleaned_title().is_empty() {
            body.push(section);
        }
    }

    // Without a contact block only the caller's override feeds the identity.
    let identity =
        identity.unwrap_or_else(|| resolve_identity(ParsedContact::default(), ctx.identity, None));

    Document {
        identity,
        document_title: ctx.document_title.map(String::from),
        summary,
        body,
        sections_detected,
        raw_text: raw_text.to_string(),
    }
}
