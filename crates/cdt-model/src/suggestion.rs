//! Scored code suggestions produced by the matching engine.

use serde::{Deserialize, Serialize};

use crate::procedure::{ProcedureCategory, ProcedureCode};

/// A reference-table entry scored against a query.
///
/// Produced per query and discarded; never persisted. Ordering is by
/// descending `score`, ties in reference-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMatch {
    /// Matched CDT code.
    pub code: ProcedureCode,
    /// Description from the reference table.
    pub description: String,
    /// Service category of the matched code.
    pub category: ProcedureCategory,
    /// Number of query terms found in the description (term frequency,
    /// not normalized).
    pub score: u32,
    /// The query terms that hit, in query order.
    pub matched_terms: Vec<String>,
}

impl ScoredMatch {
    /// Human-readable explanation of why this entry matched.
    pub fn explain(&self) -> String {
        format!(
            "{} term(s) matched: {}",
            self.score,
            self.matched_terms.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_lists_matched_terms() {
        let m = ScoredMatch {
            code: ProcedureCode::new("D3330").unwrap(),
            description: "Endodontic therapy (root canal), molar tooth".to_string(),
            category: ProcedureCategory::Endodontics,
            score: 2,
            matched_terms: vec!["root".to_string(), "molar".to_string()],
        };
        assert_eq!(m.explain(), "2 term(s) matched: root, molar");
    }
}
