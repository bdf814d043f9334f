use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("dataset has no header row")]
    MissingHeader,
    #[error("column has {actual} values but the dataset has {expected} rows")]
    ColumnLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
