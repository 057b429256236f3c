//! SOAP note parsing.
//!
//! Visit notes arrive as free text, often produced by a transcription or
//! drafting step upstream. Headings open sections:
//!
//! ```text
//! Date: 2024-01-15
//! S: Patient reports cold sensitivity lower right.
//! O: Deep carious lesion on #30, distal.
//! Assessment: Irreversible pulpitis #30.
//! Plan: Root canal therapy, molar. Crown to follow.
//! ```
//!
//! Full section names and single-letter forms are accepted, case-insensitive,
//! followed by `:` or `-`. Text before any heading is treated as subjective.
//! An optional `Date:` header before the first section is parsed as the
//! visit date.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use cdt_model::{NoteSection, SoapNote};

use crate::error::NoteError;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(subjective|objective|assessment|plan|[soap])\s*[:\-]\s*(.*)$")
        .expect("valid heading pattern")
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*date\s*[:\-]\s*(.+)$").expect("valid date pattern")
});

/// Split free note text into SOAP sections.
///
/// Whitespace-only input is rejected; anything else parses, with unlabeled
/// text landing in the subjective section.
pub fn parse_soap_note(text: &str) -> Result<SoapNote, NoteError> {
    if text.trim().is_empty() {
        return Err(NoteError::EmptyNote);
    }

    let mut note = SoapNote::default();
    let mut current: Option<NoteSection> = None;
    let mut buffers: [Vec<&str>; 4] = [const { Vec::new() }; 4];

    for line in text.lines() {
        if current.is_none()
            && note.date.is_none()
            && let Some(caps) = DATE_RE.captures(line)
        {
            note.date = parse_date(caps.get(1).map_or("", |m| m.as_str()).trim());
            continue;
        }

        if let Some(caps) = HEADING_RE.captures(line) {
            let section = section_for(caps.get(1).map_or("", |m| m.as_str()));
            current = Some(section);
            let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
            if !rest.is_empty() {
                buffers[section_index(section)].push(rest);
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let section = current.unwrap_or(NoteSection::Subjective);
        buffers[section_index(section)].push(trimmed);
    }

    for section in NoteSection::ALL {
        let buffer = &buffers[section_index(section)];
        if !buffer.is_empty() {
            note.set_section(section, buffer.join("\n"));
        }
    }

    Ok(note)
}

fn section_for(heading: &str) -> NoteSection {
    match heading
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or_default()
    {
        's' => NoteSection::Subjective,
        'o' => NoteSection::Objective,
        'a' => NoteSection::Assessment,
        _ => NoteSection::Plan,
    }
}

fn section_index(section: NoteSection) -> usize {
    match section {
        NoteSection::Subjective => 0,
        NoteSection::Objective => 1,
        NoteSection::Assessment => 2,
        NoteSection::Plan => 3,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    debug!(value, "unrecognized note date format");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_headings() {
        let note = parse_soap_note(
            "Subjective: Toothache upper left.\n\
             Objective: Fractured cusp on #14.\n\
             Assessment: Cracked tooth.\n\
             Plan: Crown - porcelain/ceramic.",
        )
        .unwrap();

        assert_eq!(note.subjective.as_deref(), Some("Toothache upper left."));
        assert_eq!(note.objective.as_deref(), Some("Fractured cusp on #14."));
        assert_eq!(note.assessment.as_deref(), Some("Cracked tooth."));
        assert_eq!(note.plan.as_deref(), Some("Crown - porcelain/ceramic."));
    }

    #[test]
    fn parses_single_letter_headings_and_date() {
        let note = parse_soap_note(
            "Date: 2024-01-15\n\
             S: Cold sensitivity lower right.\n\
             O: Deep carious lesion on #30.\n\
             A: Irreversible pulpitis.\n\
             P: Root canal therapy, molar.",
        )
        .unwrap();

        assert_eq!(note.date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(note.plan.as_deref(), Some("Root canal therapy, molar."));
    }

    #[test]
    fn multiline_sections_accumulate() {
        let note = parse_soap_note(
            "Plan:\n\
             Composite filling, posterior.\n\
             Recall in six months.",
        )
        .unwrap();

        assert_eq!(
            note.plan.as_deref(),
            Some("Composite filling, posterior.\nRecall in six months.")
        );
    }

    #[test]
    fn unlabeled_text_lands_in_subjective() {
        let note = parse_soap_note("Patient presents with a broken molar.").unwrap();
        assert_eq!(
            note.subjective.as_deref(),
            Some("Patient presents with a broken molar.")
        );
        assert!(note.plan.is_none());
    }

    #[test]
    fn non_heading_words_do_not_open_sections() {
        // "Allergies" starts with 'a' but is not a heading.
        let note = parse_soap_note("Allergies: penicillin.\nPlan: extraction.").unwrap();
        assert_eq!(note.subjective.as_deref(), Some("Allergies: penicillin."));
        assert_eq!(note.plan.as_deref(), Some("extraction."));
    }

    #[test]
    fn us_date_format_is_accepted() {
        let note = parse_soap_note("Date: 01/15/2024\nPlan: prophylaxis.").unwrap();
        assert_eq!(note.date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn unparseable_date_is_ignored() {
        let note = parse_soap_note("Date: mid January\nPlan: prophylaxis.").unwrap();
        assert_eq!(note.date, None);
        assert_eq!(note.plan.as_deref(), Some("prophylaxis."));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_soap_note("   \n  "), Err(NoteError::EmptyNote));
    }
}
