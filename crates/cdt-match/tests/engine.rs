//! Engine behavior against the full embedded reference table.

use cdt_match::SuggestionEngine;
use cdt_standards::load_embedded_catalog;

fn engine() -> SuggestionEngine {
    let catalog = load_embedded_catalog().expect("embedded catalog");
    SuggestionEngine::new(catalog.entries().to_vec())
}

#[test]
fn composite_filling_posterior_suggests_posterior_composites() {
    let matches = engine().suggest("composite filling posterior tooth");

    let hit = matches
        .iter()
        .find(|m| m.code.as_str() == "D2391")
        .expect("D2391 suggested");
    assert!(hit.score >= 1);
    assert!(hit.matched_terms.contains(&"composite".to_string()));
    assert!(hit.matched_terms.contains(&"posterior".to_string()));
}

#[test]
fn root_canal_molar_suggests_molar_endodontic_therapy() {
    let matches = engine().suggest("root canal molar");

    let hit = matches
        .iter()
        .find(|m| m.code.as_str() == "D3330")
        .expect("D3330 suggested");
    // "root", "canal" and "molar" all occur in the D3330 description.
    assert!(hit.score >= 2);
}

#[test]
fn empty_query_returns_nothing() {
    assert!(engine().suggest("").is_empty());
}

#[test]
fn nonsense_query_returns_nothing() {
    assert!(engine().suggest("xyzabc nonsense query").is_empty());
}

#[test]
fn results_are_ordered_by_descending_score() {
    let matches = engine().suggest("extraction of impacted wisdom tooth");
    assert!(!matches.is_empty());
    for pair in matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn full_workflow_wisdom_tooth_extraction() {
    let matches = engine().suggest_top("surgical extraction impacted tooth", 5);
    assert!(!matches.is_empty());
    let top_codes: Vec<&str> = matches.iter().map(|m| m.code.as_str()).collect();
    // Surgical extraction (D7210) outranks simple extraction on this query.
    assert!(top_codes.contains(&"D7210"), "got {top_codes:?}");
}
