//! Standards directory resolution.

use std::path::PathBuf;

/// Environment variable naming an external standards directory.
pub const STANDARDS_ENV_VAR: &str = "CDT_STANDARDS_DIR";

/// External standards directory from the environment, if set and non-empty.
pub fn standards_dir_from_env() -> Option<PathBuf> {
    std::env::var(STANDARDS_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
