use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The builder referenced a classification the catalogue does not hold.
    /// `id` is the value as supplied, including any `+` suffix.
    #[error("classification not found: {id}")]
    ClassificationNotFound { id: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
