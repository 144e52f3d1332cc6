//! Error types for table-spec validation.

/// Errors that can occur while assembling a table spec.
///
/// Rendering itself has no failure modes; every invalid configuration is
/// rejected here, before a renderer ever runs.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The source table name is empty.
    #[error("table name is empty")]
    EmptyTableName,

    /// The primary key column name is empty.
    #[error("primary key column name is empty")]
    EmptyPrimaryKey,

    /// The primary key was listed among the tracked columns.
    #[error("primary key '{0}' must not be listed among tracked columns")]
    PrimaryKeyTracked(String),

    /// No columns were selected for tracking.
    #[error("no columns selected for tracking; an update trigger with no tracked columns would never fire")]
    NoTrackedColumns,
}

/// Result type for table-spec construction.
pub type Result<T> = std::result::Result<T, CoreError>;
