//! Billing-code suggestions for a parsed note.

use cdt_match::SuggestionEngine;
use cdt_model::{ScoredMatch, SoapNote};
use tracing::debug;

/// Build the matcher query for a note.
///
/// Assessment and plan carry the billable intent; the remaining sections are
/// only used when both are absent. Punctuation is folded to whitespace so
/// sentence text tokenizes cleanly.
pub fn note_query(note: &SoapNote) -> String {
    let assessment_plan: Vec<&str> = [note.assessment.as_deref(), note.plan.as_deref()]
        .into_iter()
        .flatten()
        .collect();

    let text = if assessment_plan.is_empty() {
        debug!("note has no assessment or plan; matching against all sections");
        note.combined_text()
    } else {
        assessment_plan.join("\n")
    };

    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Suggest up to `limit` codes for a parsed note.
pub fn suggest_for_note(
    note: &SoapNote,
    engine: &SuggestionEngine,
    limit: usize,
) -> Vec<ScoredMatch> {
    engine.suggest_top(&note_query(note), limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdt_model::NoteSection;

    #[test]
    fn query_prefers_assessment_and_plan() {
        let mut note = SoapNote::default();
        note.set_section(NoteSection::Subjective, "patient anxious".to_string());
        note.set_section(NoteSection::Plan, "root canal, molar.".to_string());

        let query = note_query(&note);
        assert!(query.contains("root canal"));
        assert!(!query.contains("anxious"));
    }

    #[test]
    fn query_falls_back_to_all_sections() {
        let mut note = SoapNote::default();
        note.set_section(NoteSection::Subjective, "broken molar".to_string());

        assert!(note_query(&note).contains("broken molar"));
    }

    #[test]
    fn punctuation_folds_to_whitespace() {
        let mut note = SoapNote::default();
        note.set_section(NoteSection::Plan, "crown (porcelain/ceramic); re-cement".to_string());

        let query = note_query(&note);
        assert_eq!(query, "crown  porcelain ceramic   re cement");
    }
}
