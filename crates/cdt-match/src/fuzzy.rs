//! Fuzzy code-identifier matching for did-you-mean suggestions.
//!
//! Uses Jaro-Winkler similarity over the code identifiers themselves, so a
//! typo like `D2931` vs `D2391` still surfaces the intended code.

use std::cmp::Ordering;

use cdt_model::{ProcedureCode, ProcedureEntry};
use serde::Serialize;

use rapidfuzz::distance::jaro_winkler;

/// A near-miss code candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CodeCandidate {
    pub code: ProcedureCode,
    /// Jaro-Winkler similarity in 0.0..=1.0.
    pub similarity: f64,
}

/// Rank catalog codes by similarity to `text`, best first.
pub fn closest_codes(entries: &[ProcedureEntry], text: &str, limit: usize) -> Vec<CodeCandidate> {
    let needle = text.trim().to_ascii_uppercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<CodeCandidate> = entries
        .iter()
        .map(|entry| CodeCandidate {
            code: entry.code.clone(),
            similarity: jaro_winkler::similarity(needle.chars(), entry.code.as_str().chars()),
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(limit);
    candidates
}
