#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::catalog::CodeCatalog;

/// Integrity summary of a loaded catalog, for `cdt-coder doctor`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub version: String,
    pub source: String,
    pub fingerprint: String,
    pub counts: DoctorCounts,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub codes: usize,
    pub categories: BTreeMap<String, usize>,
}

impl DoctorReport {
    pub fn from_catalog(catalog: &CodeCatalog) -> Self {
        Self {
            schema: "cdt-coder.catalog-doctor".to_string(),
            schema_version: 1,
            version: catalog.version().to_string(),
            source: catalog.source().to_string(),
            fingerprint: catalog.fingerprint().to_string(),
            counts: DoctorCounts {
                codes: catalog.len(),
                categories: catalog.category_counts(),
            },
        }
    }
}
