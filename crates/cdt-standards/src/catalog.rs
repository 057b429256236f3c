//! Read-only procedure-code reference table.
//!
//! The catalog is constructed once at startup and never mutated. Entry order
//! follows the source file, which is also the tie-break order for equal
//! match scores downstream.

use std::collections::BTreeMap;

use cdt_model::{ProcedureCode, ProcedureEntry};
use serde::Serialize;

use crate::error::StandardsError;

/// The loaded reference table plus its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct CodeCatalog {
    version: String,
    source: String,
    fingerprint: String,
    entries: Vec<ProcedureEntry>,
    #[serde(skip)]
    by_code: BTreeMap<ProcedureCode, usize>,
}

impl CodeCatalog {
    /// Build a catalog from parsed entries.
    ///
    /// Rejects empty tables and duplicate codes; order is preserved.
    pub fn new(
        version: impl Into<String>,
        source: impl Into<String>,
        fingerprint: String,
        entries: Vec<ProcedureEntry>,
    ) -> Result<Self, StandardsError> {
        let source = source.into();
        if entries.is_empty() {
            return Err(StandardsError::EmptyCatalog {
                source_name: source,
            });
        }

        let mut by_code = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if by_code.insert(entry.code.clone(), index).is_some() {
                return Err(StandardsError::DuplicateCode {
                    source_name: source,
                    code: entry.code.to_string(),
                });
            }
        }

        Ok(Self {
            version: version.into(),
            source,
            fingerprint,
            entries,
            by_code,
        })
    }

    /// Catalog release label (e.g. "CDT 2024").
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Where this catalog was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// sha256 of the backing CSV bytes, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[ProcedureEntry] {
        &self.entries
    }

    /// Look up a single entry by code.
    pub fn get(&self, code: &ProcedureCode) -> Option<&ProcedureEntry> {
        self.by_code.get(code).map(|&index| &self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry counts per service category, keyed by the category identifier.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts
                .entry(entry.category().as_str().to_string())
                .or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, description: &str) -> ProcedureEntry {
        ProcedureEntry::new(ProcedureCode::new(code).unwrap(), description)
    }

    fn catalog(entries: Vec<ProcedureEntry>) -> Result<CodeCatalog, StandardsError> {
        CodeCatalog::new("TEST", "test.csv", "deadbeef".to_string(), entries)
    }

    #[test]
    fn preserves_source_order_and_indexes_codes() {
        let cat = catalog(vec![
            entry("D1110", "Prophylaxis - adult"),
            entry("D0120", "Periodic oral evaluation"),
        ])
        .unwrap();

        assert_eq!(cat.len(), 2);
        assert_eq!(cat.entries()[0].code.as_str(), "D1110");
        let code = ProcedureCode::new("D0120").unwrap();
        assert_eq!(
            cat.get(&code).unwrap().description,
            "Periodic oral evaluation"
        );
    }

    #[test]
    fn rejects_duplicate_codes() {
        let result = catalog(vec![
            entry("D1110", "Prophylaxis - adult"),
            entry("D1110", "Prophylaxis - adult (again)"),
        ]);
        assert!(matches!(
            result,
            Err(StandardsError::DuplicateCode { .. })
        ));
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            catalog(vec![]),
            Err(StandardsError::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn counts_entries_per_category() {
        let cat = catalog(vec![
            entry("D1110", "Prophylaxis - adult"),
            entry("D1120", "Prophylaxis - child"),
            entry("D3330", "Endodontic therapy, molar"),
        ])
        .unwrap();

        let counts = cat.category_counts();
        assert_eq!(counts.get("preventive"), Some(&2));
        assert_eq!(counts.get("endodontics"), Some(&1));
        assert_eq!(counts.get("restorative"), None);
    }
}
