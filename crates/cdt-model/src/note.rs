//! SOAP visit note model.
//!
//! SOAP (Subjective / Objective / Assessment / Plan) is the standard clinical
//! documentation structure. Notes arrive as free text from any producer; the
//! parser in `cdt-note` splits them into this structure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four SOAP sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSection {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl NoteSection {
    pub const ALL: [Self; 4] = [
        Self::Subjective,
        Self::Objective,
        Self::Assessment,
        Self::Plan,
    ];

    /// Section heading as written in notes.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Subjective => "Subjective",
            Self::Objective => "Objective",
            Self::Assessment => "Assessment",
            Self::Plan => "Plan",
        }
    }
}

impl fmt::Display for NoteSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// A structured SOAP note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapNote {
    /// Visit date when the note carries a `Date:` header.
    pub date: Option<NaiveDate>,
    pub subjective: Option<String>,
    pub objective: Option<String>,
    pub assessment: Option<String>,
    pub plan: Option<String>,
}

impl SoapNote {
    /// Text of a single section, if present.
    pub fn section(&self, section: NoteSection) -> Option<&str> {
        match section {
            NoteSection::Subjective => self.subjective.as_deref(),
            NoteSection::Objective => self.objective.as_deref(),
            NoteSection::Assessment => self.assessment.as_deref(),
            NoteSection::Plan => self.plan.as_deref(),
        }
    }

    /// Set the text of a single section.
    pub fn set_section(&mut self, section: NoteSection, text: String) {
        let slot = match section {
            NoteSection::Subjective => &mut self.subjective,
            NoteSection::Objective => &mut self.objective,
            NoteSection::Assessment => &mut self.assessment,
            NoteSection::Plan => &mut self.plan,
        };
        *slot = Some(text);
    }

    /// True when no section holds any text.
    pub fn is_empty(&self) -> bool {
        NoteSection::ALL
            .iter()
            .all(|s| self.section(*s).is_none_or(|text| text.trim().is_empty()))
    }

    /// All present sections joined into one query string, in SOAP order.
    pub fn combined_text(&self) -> String {
        NoteSection::ALL
            .iter()
            .filter_map(|s| self.section(*s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
