#![deny(unsafe_code)]

pub mod catalog;
pub mod doctor;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod paths;

pub use crate::catalog::CodeCatalog;
pub use crate::doctor::DoctorReport;
pub use crate::error::StandardsError;
pub use crate::loader::{
    EMBEDDED_VERSION, load_catalog, load_catalog_from_dir, load_embedded_catalog,
};
pub use crate::paths::STANDARDS_ENV_VAR;
