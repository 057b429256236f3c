//! Catalog loading: embedded default table and external directories.
//!
//! Resolution order used by callers:
//! 1. explicit directory (CLI `--standards-dir`)
//! 2. `CDT_STANDARDS_DIR` environment variable
//! 3. the embedded default table

use std::path::Path;

use cdt_model::{ProcedureCode, ProcedureEntry};
use sha2::Digest;

use crate::catalog::CodeCatalog;
use crate::error::StandardsError;
use crate::manifest::{MANIFEST_FILE, load_manifest, read_verified, sha256_hex};
use crate::paths::standards_dir_from_env;

/// Default reference table compiled into the binary.
const EMBEDDED_CODES_CSV: &str = include_str!("../data/cdt_codes.csv");

/// Release label of the embedded table.
pub const EMBEDDED_VERSION: &str = "CDT 2024";

const EMBEDDED_SOURCE: &str = "embedded:cdt_codes.csv";

/// Load the catalog compiled into the binary.
pub fn load_embedded_catalog() -> Result<CodeCatalog, StandardsError> {
    let bytes = EMBEDDED_CODES_CSV.as_bytes();
    let entries = parse_codes_csv(EMBEDDED_SOURCE, bytes)?;
    CodeCatalog::new(
        EMBEDDED_VERSION,
        EMBEDDED_SOURCE,
        sha256_hex(bytes),
        entries,
    )
}

/// Load a catalog from a manifest-described directory.
///
/// The directory must contain a `catalog.toml`; every listed CSV is verified
/// against its sha256 pin before parsing. Entries keep manifest file order,
/// then row order within each file.
pub fn load_catalog_from_dir(dir: &Path) -> Result<CodeCatalog, StandardsError> {
    let manifest = load_manifest(&dir.join(MANIFEST_FILE))?;

    let mut entries = Vec::new();
    let mut hasher = sha2::Sha256::new();
    for file in &manifest.files {
        let bytes = read_verified(dir, file)?;
        hasher.update(&bytes);
        entries.extend(parse_codes_csv(&file.path, &bytes)?);
    }

    CodeCatalog::new(
        manifest.catalog.version,
        dir.display().to_string(),
        hex::encode(hasher.finalize()),
        entries,
    )
}

/// Load the catalog, honoring an explicit directory override and the
/// environment variable before falling back to the embedded table.
pub fn load_catalog(dir_override: Option<&Path>) -> Result<CodeCatalog, StandardsError> {
    if let Some(dir) = dir_override {
        return load_catalog_from_dir(dir);
    }
    if let Some(dir) = standards_dir_from_env() {
        return load_catalog_from_dir(&dir);
    }
    load_embedded_catalog()
}

/// Parse a `Code,Description` CSV into entries.
pub fn parse_codes_csv(
    source_name: &str,
    bytes: &[u8],
) -> Result<Vec<ProcedureEntry>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(source_name, &e))?
        .clone();
    let idx_code = header_index(&headers, "Code").ok_or_else(|| StandardsError::Csv {
        source_name: source_name.to_string(),
        message: "missing 'Code' column".to_string(),
    })?;
    let idx_description =
        header_index(&headers, "Description").ok_or_else(|| StandardsError::Csv {
            source_name: source_name.to_string(),
            message: "missing 'Description' column".to_string(),
        })?;

    let mut entries = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(source_name, &e))?;
        let code_field = field(&row, idx_code);
        let description = field(&row, idx_description);

        // Blank lines show up as empty records; skip them.
        if code_field.is_empty() && description.is_empty() {
            continue;
        }

        let code =
            ProcedureCode::new(code_field).map_err(|source| StandardsError::InvalidCode {
                source_name: source_name.to_string(),
                row: row_number + 2,
                source,
            })?;
        entries.push(ProcedureEntry::new(code, description));
    }

    Ok(entries)
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

fn field(row: &csv::StringRecord, index: usize) -> String {
    row.get(index).unwrap_or_default().trim().to_string()
}

fn csv_error(source_name: &str, error: &csv::Error) -> StandardsError {
    StandardsError::Csv {
        source_name: source_name.to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_and_covers_all_series() {
        let catalog = load_embedded_catalog().expect("embedded catalog");
        assert_eq!(catalog.version(), EMBEDDED_VERSION);
        assert!(catalog.len() > 100, "expected a full table");

        let counts = catalog.category_counts();
        assert_eq!(counts.len(), 10, "every CDT series represented");
    }

    #[test]
    fn parser_skips_blank_rows() {
        let data = b"Code,Description\nD1110,Prophylaxis - adult\n,\nD1120,Prophylaxis - child\n";
        let entries = parse_codes_csv("inline", data).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn parser_reports_row_of_invalid_code() {
        let data = b"Code,Description\nD1110,Prophylaxis - adult\nBAD,Broken row\n";
        let error = parse_codes_csv("inline", data).unwrap_err();
        match error {
            StandardsError::InvalidCode { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parser_requires_known_headers() {
        let data = b"Id,Text\nD1110,Prophylaxis\n";
        assert!(matches!(
            parse_codes_csv("inline", data),
            Err(StandardsError::Csv { .. })
        ));
    }
}
