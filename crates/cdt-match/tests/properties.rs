//! Algebraic properties of the suggestion engine.

use cdt_match::SuggestionEngine;
use cdt_model::{ProcedureCode, ProcedureEntry};
use proptest::prelude::*;

fn engine() -> SuggestionEngine {
    let entry = |code: &str, description: &str| {
        ProcedureEntry::new(ProcedureCode::new(code).unwrap(), description)
    };
    SuggestionEngine::new(vec![
        entry("D1110", "Prophylaxis (cleaning) - adult"),
        entry("D2391", "Resin-based composite filling - one surface, posterior"),
        entry("D3330", "Endodontic therapy (root canal), molar tooth"),
        entry("D7140", "Extraction, erupted tooth or exposed root"),
    ])
}

fn score_of(engine: &SuggestionEngine, query: &str, code: &str) -> u32 {
    engine
        .suggest(query)
        .into_iter()
        .find(|m| m.code.as_str() == code)
        .map(|m| m.score)
        .unwrap_or(0)
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z]{0,8}", 0..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn suggesting_twice_yields_identical_results(q in query()) {
        let engine = engine();
        prop_assert_eq!(engine.suggest(&q), engine.suggest(&q));
    }

    #[test]
    fn scoring_is_case_insensitive(q in query()) {
        let engine = engine();
        prop_assert_eq!(engine.suggest(&q.to_uppercase()), engine.suggest(&q.to_lowercase()));
    }

    #[test]
    fn tokens_of_three_or_fewer_chars_never_influence_results(
        q in query(),
        noise in "[a-zA-Z]{1,3}",
    ) {
        let engine = engine();
        prop_assert_eq!(engine.suggest(&format!("{q} {noise}")), engine.suggest(&q));
    }

    #[test]
    fn appending_a_matching_token_raises_the_score_by_one(q in query()) {
        let engine = engine();
        // "canal" always occurs in the D3330 description.
        let base = score_of(&engine, &q, "D3330");
        let boosted = score_of(&engine, &format!("{q} canal"), "D3330");
        prop_assert_eq!(boosted, base + 1);
    }

    #[test]
    fn scores_never_exceed_term_count(q in query()) {
        let engine = engine();
        let term_count = q
            .split_whitespace()
            .filter(|t| t.chars().count() > 3)
            .count() as u32;
        for m in engine.suggest(&q) {
            prop_assert!(m.score <= term_count);
            prop_assert_eq!(m.score as usize, m.matched_terms.len());
        }
    }
}

#[test]
fn whitespace_only_queries_are_empty_results() {
    let engine = engine();
    for q in ["", " ", "\t\n", "   "] {
        assert!(engine.suggest(q).is_empty(), "query {q:?}");
    }
}
