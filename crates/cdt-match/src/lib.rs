#![deny(unsafe_code)]

//! Ranking of CDT reference-table entries against free clinical text.

pub mod engine;
pub mod fuzzy;
pub mod score;

pub use engine::SuggestionEngine;
pub use fuzzy::CodeCandidate;
