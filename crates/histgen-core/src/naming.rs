//! Naming rules for derived identifiers.
//!
//! All derived names used by the renderers come from these four functions so
//! the DDL and both triggers always agree on them. The functions are total
//! over strings: no identifier legality checks, no quoting. A name that
//! collides with a reserved word passes through unchanged and surfaces only
//! when the generated SQL is executed.

/// Returns the history table name for a source table.
#[must_use]
pub fn history_table_name(table: &str) -> String {
    format!("{table}_history")
}

/// Returns the post-change column name for a tracked column.
#[must_use]
pub fn new_column_name(column: &str) -> String {
    format!("new_{column}")
}

/// Returns the pre-change column name for a tracked column.
#[must_use]
pub fn old_column_name(column: &str) -> String {
    format!("old_{column}")
}

/// Returns the history table's copy of the source primary key column.
#[must_use]
pub fn pk_column_name(table: &str, primary_key: &str) -> String {
    format!("{table}_{primary_key}")
}
