use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// Named columns were not found in the source data.
    #[error("columns missing: {}", columns.join(", "))]
    ColumnsMissing { columns: Vec<String> },

    /// A grouped table has no row for a category within a group.
    #[error("no row for category {category:?} in group {group:?}")]
    MissingCrosstabCell { category: String, group: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildError>;
