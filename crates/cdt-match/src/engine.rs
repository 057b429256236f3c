//! Code suggestion engine.
//!
//! Scores every reference-table entry against a free-text query and returns
//! the hits ranked by descending score. The engine owns an immutable copy of
//! the table; calls are pure and safe from any number of threads.

use cdt_model::{ProcedureCategory, ProcedureEntry, ScoredMatch};

use crate::fuzzy::{CodeCandidate, closest_codes};
use crate::score::{query_terms, score_description};

/// Ranks reference-table entries against clinical text.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    entries: Vec<ProcedureEntry>,
}

impl SuggestionEngine {
    /// Build an engine over reference-table entries. Entry order is kept and
    /// serves as the tie-break order for equal scores.
    pub fn new(entries: Vec<ProcedureEntry>) -> Self {
        Self { entries }
    }

    /// The entries this engine scores against.
    pub fn entries(&self) -> &[ProcedureEntry] {
        &self.entries
    }

    /// Rank all entries against a query.
    ///
    /// Empty or whitespace-only queries return no matches, as do queries
    /// where no term hits any description. Results are ordered by descending
    /// score; ties keep table order (the sort is stable).
    pub fn suggest(&self, query: &str) -> Vec<ScoredMatch> {
        let terms = query_terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<ScoredMatch> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let (score, matched_terms) = score_description(&entry.description, &terms);
                (score > 0).then(|| ScoredMatch {
                    code: entry.code.clone(),
                    description: entry.description.clone(),
                    category: entry.category(),
                    score,
                    matched_terms,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }

    /// Rank entries and keep the best `limit` matches.
    pub fn suggest_top(&self, query: &str, limit: usize) -> Vec<ScoredMatch> {
        let mut matches = self.suggest(query);
        matches.truncate(limit);
        matches
    }

    /// Rank entries within a single service category.
    pub fn suggest_in_category(
        &self,
        query: &str,
        category: ProcedureCategory,
    ) -> Vec<ScoredMatch> {
        self.suggest(query)
            .into_iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Nearest code identifiers to `text`, for did-you-mean output when a
    /// lookup by code fails.
    pub fn closest_codes(&self, text: &str, limit: usize) -> Vec<CodeCandidate> {
        closest_codes(&self.entries, text, limit)
    }
}
