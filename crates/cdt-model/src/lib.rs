#![deny(unsafe_code)]

pub mod error;
pub mod note;
pub mod procedure;
pub mod suggestion;

pub use error::{ModelError, Result};
pub use note::{NoteSection, SoapNote};
pub use procedure::{ProcedureCategory, ProcedureCode, ProcedureEntry};
pub use suggestion::ScoredMatch;
