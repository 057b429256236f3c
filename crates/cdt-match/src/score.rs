//! Term extraction and description scoring.
//!
//! Scoring is deliberately simple: a query term hits an entry when it occurs
//! as a substring of the entry's description, compared case-insensitively.
//! Each hit adds 1. Terms of three characters or fewer carry no signal
//! ("a", "the", tooth numbers) and are dropped before scoring.

/// Query terms shorter than or equal to this many characters are ignored.
pub const MIN_TERM_CHARS: usize = 3;

/// Split a query into scoring terms: whitespace tokens, lowercased, with
/// short tokens removed. Repeated tokens are kept; each occurrence counts.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TERM_CHARS)
        .map(str::to_lowercase)
        .collect()
}

/// Score one description against prepared terms.
///
/// Returns the term-frequency score and the terms that hit, in query order.
pub fn score_description(description: &str, terms: &[String]) -> (u32, Vec<String>) {
    let haystack = description.to_lowercase();
    let mut matched = Vec::new();
    for term in terms {
        if haystack.contains(term.as_str()) {
            matched.push(term.clone());
        }
    }
    (matched.len() as u32, matched)
}
