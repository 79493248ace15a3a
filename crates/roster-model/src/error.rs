use thiserror::Error;

/// Errors raised when parsing roster values from their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown voter status: {0}")]
    UnknownStatus(String),
    #[error("unknown gender: {0}")]
    UnknownGender(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("invalid birth date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
