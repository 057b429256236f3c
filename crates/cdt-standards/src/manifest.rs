#![deny(unsafe_code)]

//! TOML manifest for external catalog directories.
//!
//! An external standards directory carries a `catalog.toml` naming the CSV
//! files it contains and pinning their sha256 digests:
//!
//! ```toml
//! [catalog]
//! schema = "cdt-coder.code-catalog"
//! schema_version = 1
//! version = "CDT 2024"
//!
//! [[files]]
//! path = "cdt_codes.csv"
//! sha256 = "..."
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::error::StandardsError;

/// Expected `catalog.schema` value.
pub const MANIFEST_SCHEMA: &str = "cdt-coder.code-catalog";

/// Manifest file name inside a standards directory.
pub const MANIFEST_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub catalog: CatalogHeader,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogHeader {
    pub schema: String,
    pub schema_version: u32,
    /// Release label, e.g. "CDT 2024".
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
}

/// Hex-encoded sha256 digest, as pinned in manifests.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

/// Load and structurally validate a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest, StandardsError> {
    let text =
        std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    let manifest: Manifest = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    if manifest.catalog.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            path: path.to_path_buf(),
            message: format!(
                "unexpected schema '{}' (expected '{MANIFEST_SCHEMA}')",
                manifest.catalog.schema
            ),
        });
    }
    if manifest.files.is_empty() {
        return Err(StandardsError::InvalidManifest {
            path: path.to_path_buf(),
            message: "manifest lists no files".to_string(),
        });
    }
    for file in &manifest.files {
        let listed = Path::new(&file.path);
        if listed.is_absolute() || listed.components().any(|c| c.as_os_str() == "..") {
            return Err(StandardsError::InvalidManifest {
                path: path.to_path_buf(),
                message: format!("file path '{}' must be relative to the manifest", file.path),
            });
        }
    }

    Ok(manifest)
}

/// Read a manifest-listed file and verify its sha256 pin.
pub fn read_verified(dir: &Path, file: &ManifestFile) -> Result<Vec<u8>, StandardsError> {
    let path = dir.join(&file.path);
    if !path.is_file() {
        return Err(StandardsError::MissingFile { path });
    }
    let bytes = std::fs::read(&path).map_err(|source| StandardsError::io(&path, source))?;

    let actual = sha256_hex(&bytes);
    if !actual.eq_ignore_ascii_case(&file.sha256) {
        return Err(StandardsError::Sha256Mismatch {
            path,
            expected: file.sha256.to_lowercase(),
            actual,
        });
    }

    Ok(bytes)
}
