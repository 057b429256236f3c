use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("note text is empty")]
    EmptyNote,
}

pub type Result<T> = std::result::Result<T, NoteError>;
