//! Schema representation types.
//!
//! These types describe the slice of a source table that the generator cares
//! about: the table name, the chosen primary key, and the columns selected
//! for change tracking. They are assembled once per run from live
//! introspection plus user selection, then consumed by the renderers.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A single column of the source table.
///
/// `sql_type` is the raw database type expression (e.g. `varchar(255)`),
/// opaque to the generator and copied verbatim into generated DDL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Raw SQL type expression, unvalidated.
    pub sql_type: String,
}

impl Column {
    /// Creates a new column.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

/// A validated description of what to generate history artifacts for.
///
/// Construction is the validation boundary: once a `TableSpec` exists, the
/// renderers are total functions over it. Tracked columns keep the order in
/// which they were given, which is the source schema's declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Source table name.
    pub table: String,
    /// The source table's primary key column.
    pub primary_key: Column,
    /// Columns to track, excluding the primary key, in declaration order.
    pub tracked: Vec<Column>,
}

impl TableSpec {
    /// Creates a new table spec, enforcing the construction invariants.
    ///
    /// # Errors
    ///
    /// Returns an error when the table or primary key name is empty, when the
    /// primary key appears in `tracked`, or when `tracked` is empty. A
    /// trigger with zero tracked columns would have an empty change guard and
    /// never fire, so that configuration is rejected here rather than
    /// special-cased in the renderers.
    pub fn new(table: impl Into<String>, primary_key: Column, tracked: Vec<Column>) -> Result<Self> {
        let table = table.into();

        if table.is_empty() {
            return Err(CoreError::EmptyTableName);
        }
        if primary_key.name.is_empty() {
            return Err(CoreError::EmptyPrimaryKey);
        }
        if tracked.iter().any(|c| c.name == primary_key.name) {
            return Err(CoreError::PrimaryKeyTracked(primary_key.name));
        }
        if tracked.is_empty() {
            return Err(CoreError::NoTrackedColumns);
        }

        Ok(Self {
            table,
            primary_key,
            tracked,
        })
    }
}
