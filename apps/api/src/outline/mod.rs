// CV outline parser: rebuilds a typed document from generator-produced CV text.
// Pipeline: splitter → classifier (per-section sub-parsers) → assembler.
// Pure and synchronous; every input, including "", yields a Document.

pub mod assembler;
pub mod classifier;
pub mod contact;
pub mod entries;
pub mod handlers;
pub mod models;
pub mod skills;
pub mod splitter;
pub mod text;

use tracing::debug;

use crate::outline::assembler::assemble;
use crate::outline::classifier::{structure_section, ClassifyContext};
use crate::outline::models::{Document, IdentityOverride, StructuredSection};
use crate::outline::splitter::split_sections;

/// Parses generated CV text into a `Document`. Never fails.
pub fn parse_cv(text: &str, identity: Option<&IdentityOverride>) -> Document {
    let split = split_sections(text);
    debug!(
        "Split CV text into {} sections (document title: {:?})",
        split.sections.len(),
        split.document_title
    );

    let ctx = ClassifyContext {
        identity,
        document_title: split.document_title.as_deref(),
    };
    let sections: Vec<StructuredSection> = split
        .sections
        .into_iter()
        .map(|section| structure_section(section, &ctx))
        .collect();

    let document = assemble(sections, &ctx, text);
    debug!(
        "Assembled CV document: {} body sections, summary={}",
        document.body.len(),
        document.summary.is_some()
    );
    document
}
