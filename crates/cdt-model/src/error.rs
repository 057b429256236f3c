use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid procedure code '{value}': {reason}")]
    InvalidCode { value: String, reason: String },
    #[error("unknown procedure category '{0}'")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
