//! Experience/Projects and Education sections: repeated entry cards.
//!
//! Lines are scanned into a single work-in-progress draft. The draft lives in an
//! explicit two-state accumulator:
//!
//! ```text
//! NoItem ──(any field line)──────────────────────────────▶ Accumulating
//! Accumulating ──(title line, draft has boundary fields)─▶ flush, Accumulating(new draft)
//! Accumulating ──(title line, no boundary fields)────────▶ Accumulating (title replaced)
//! end of body ──▶ flush if the draft is complete
//! ```
//!
//! The boundary rule is a heuristic: a multi-line title or generator output that
//! skips the expected fields can merge or split entries. It is kept as is.

use crate::outline::models::{EducationItem, ExperienceItem, SectionItems, SectionPayload};
use crate::outline::text::{non_blank, starts_with_bullet, strip_bullet, strip_prefix_ci};

/// Guidance shown under an experience entry whose text carried the
/// "Key responsibilities and achievements" label.
pub const ACHIEVEMENTS_HINT: &str =
    "(Detail achievements using action verbs; quantify results where possible)";

const ACHIEVEMENTS_LABEL: &str = "key responsibilities and achievements";

// ────────────────────────────────────────────────────────────────────────────
// Accumulator state machine
// ────────────────────────────────────────────────────────────────────────────

/// An entry under construction.
pub trait EntryDraft: Default {
    /// True once the draft holds fields that make a following title line start a new entry.
    fn has_boundary_fields(&self) -> bool;
    /// True if the draft is worth keeping when the section ends.
    fn is_complete(&self) -> bool;
    fn set_title(&mut self, title: Option<String>);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccumulatorState<T> {
    NoItem,
    Accumulating(T),
}

impl<T: EntryDraft> AccumulatorState<T> {
    /// The open draft; `NoItem` opens an empty one first.
    fn draft_mut(&mut self) -> &mut T {
        match self {
            AccumulatorState::Accumulating(draft) => draft,
            AccumulatorState::NoItem => {
                *self = AccumulatorState::Accumulating(T::default());
                self.draft_mut()
            }
        }
    }

    /// Whether a title line arriving now closes the current draft.
    pub fn should_flush_on_title(&self) -> bool {
        matches!(self, AccumulatorState::Accumulating(draft) if draft.has_boundary_fields())
    }
}

#[derive(Debug, Clone)]
pub struct EntryAccumulator<T> {
    state: AccumulatorState<T>,
    items: Vec<T>,
}

impl<T: EntryDraft> Default for EntryAccumulator<T> {
    fn default() -> Self {
        Self {
            state: AccumulatorState::NoItem,
            items: Vec::new(),
        }
    }
}

impl<T: EntryDraft> EntryAccumulator<T> {
    #[cfg(test)]
    pub fn state(&self) -> &AccumulatorState<T> {
        &self.state
    }

    /// The open draft, opening an empty one if needed.
    pub fn draft(&mut self) -> &mut T {
        self.state.draft_mut()
    }

    /// Handles a title-field line: either renames the open draft or flushes it
    /// and seeds a fresh draft with `title`.
    pub fn begin_titled(&mut self, title: Option<String>) {
        if self.state.should_flush_on_title() {
            if let AccumulatorState::Accumulating(done) =
                std::mem::replace(&mut self.state, AccumulatorState::NoItem)
            {
                self.items.push(done);
            }
        }
        self.state.draft_mut().set_title(title);
    }

    pub fn finish(mut self) -> Vec<T> {
        if let AccumulatorState::Accumulating(last) = self.state {
            if last.is_complete() {
                self.items.push(last);
            }
        }
        self.items
    }
}

impl EntryDraft for ExperienceItem {
    fn has_boundary_fields(&self) -> bool {
        self.company.is_some() || !self.descriptions.is_empty() || self.dates.is_some()
    }

    fn is_complete(&self) -> bool {
        self.title.is_some() || self.company.is_some()
    }

    fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }
}

impl EntryDraft for EducationItem {
    fn has_boundary_fields(&self) -> bool {
        self.institution.is_some() || self.dates.is_some() || !self.descriptions.is_empty()
    }

    fn is_complete(&self) -> bool {
        self.degree.is_some() || self.institution.is_some()
    }

    fn set_title(&mut self, title: Option<String>) {
        self.degree = title;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience / Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExperienceField {
    Title,
    Company,
    Location,
    Dates,
}

/// Most specific prefixes first.
const EXPERIENCE_FIELDS: &[(&str, ExperienceField)] = &[
    ("job title:", ExperienceField::Title),
    ("project title:", ExperienceField::Title),
    ("company name, location:", ExperienceField::Company),
    ("company name:", ExperienceField::Company),
    ("location:", ExperienceField::Location),
    ("dates of employment:", ExperienceField::Dates),
    ("dates:", ExperienceField::Dates),
];

pub fn structure_experience(lines: &[String]) -> SectionPayload {
    let mut acc = EntryAccumulator::<ExperienceItem>::default();

    for line in lines {
        let original = line.trim();
        let text = strip_bullet(original);
        if text.is_empty() {
            continue;
        }
        apply_experience_line(&mut acc, original, text);
    }

    SectionPayload::Items(SectionItems::Experience(acc.finish()))
}

fn apply_experience_line(acc: &mut EntryAccumulator<ExperienceItem>, original: &str, text: &str) {
    if let Some((field, value)) = match_field(text, EXPERIENCE_FIELDS) {
        let value = non_blank(value);
        match field {
            ExperienceField::Title => acc.begin_titled(value),
            ExperienceField::Company => acc.draft().company = value,
            ExperienceField::Location => acc.draft().location = value,
            ExperienceField::Dates => acc.draft().dates = value,
        }
        return;
    }

    let draft = acc.draft();
    if let Some(rest) = strip_prefix_ci(text, ACHIEVEMENTS_LABEL) {
        let inline = rest
            .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '*'))
            .trim();
        if !inline.is_empty() {
            draft.descriptions.push(inline.to_string());
        }
        draft.placeholder = Some(ACHIEVEMENTS_HINT.to_string());
    } else if starts_with_bullet(original) || draft.title.is_some() {
        draft.descriptions.push(text.to_string());
    } else {
        draft.title = Some(text.to_string());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EducationField {
    Degree,
    FieldOfStudy,
    Institution,
    Location,
    Dates,
}

const EDUCATION_FIELDS: &[(&str, EducationField)] = &[
    ("degree name:", EducationField::Degree),
    ("major/field of study:", EducationField::FieldOfStudy),
    ("university name, location:", EducationField::Institution),
    ("university name:", EducationField::Institution),
    ("location:", EducationField::Location),
    ("graduation date (or expected):", EducationField::Dates),
    ("graduation date:", EducationField::Dates),
];

pub fn structure_education(lines: &[String]) -> SectionPayload {
    let mut acc = EntryAccumulator::<EducationItem>::default();

    for line in lines {
        let text = strip_bullet(line.trim());
        if text.is_empty() {
            continue;
        }
        let Some((field, value)) = match_field(text, EDUCATION_FIELDS) else {
            acc.draft().descriptions.push(text.to_string());
            continue;
        };
        let value = non_blank(value);
        match field {
            EducationField::Degree => acc.begin_titled(value),
            EducationField::FieldOfStudy => acc.draft().field_of_study = value,
            EducationField::Institution => acc.draft().institution = value,
            EducationField::Location => acc.draft().location = value,
            EducationField::Dates => acc.draft().dates = value,
        }
    }

    SectionPayload::Items(SectionItems::Education(acc.finish()))
}

fn match_field<'a, F: Copy>(text: &'a str, fields: &[(&str, F)]) -> Option<(F, &'a str)> {
    fields
        .iter()
        .find_map(|(prefix, field)| strip_prefix_ci(text, prefix).map(|rest| (*field, rest)))
}
