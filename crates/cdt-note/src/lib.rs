#![deny(unsafe_code)]

//! SOAP note parsing and note-driven code suggestion.

pub mod error;
pub mod parser;
pub mod suggest;

pub use error::{NoteError, Result};
pub use parser::parse_soap_note;
pub use suggest::{note_query, suggest_for_note};
