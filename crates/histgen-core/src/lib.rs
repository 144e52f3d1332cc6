//! History-table SQL generation.
//!
//! `histgen-core` turns a description of a source table into the three SQL
//! artifacts that together implement audit logging of row changes:
//!
//! - **DDL** - a `CREATE TABLE` for the history table, with an `old_`/`new_`
//!   column pair per tracked column
//! - **Insert trigger** - `AFTER INSERT`, records the post-insert row state
//! - **Update trigger** - `AFTER UPDATE`, records pre/post state but only
//!   when a tracked column actually changed
//!
//! Everything in this crate is pure string transformation: no I/O, no
//! database connection, no async. Validation happens once, in
//! [`schema::TableSpec::new`]; the renderers are total and deterministic
//! over a validated spec, so identical input always yields byte-identical
//! output.
//!
//! # Example
//!
//! ```rust
//! use histgen_core::prelude::*;
//!
//! let spec = TableSpec::new(
//!     "users",
//!     Column::new("id", "INT"),
//!     vec![Column::new("email", "VARCHAR(255)")],
//! )?;
//!
//! let artifacts = render_artifacts(&spec);
//! assert!(artifacts.create_table.contains("CREATE TABLE users_history"));
//! assert!(artifacts.after_update_trigger.contains("OLD.email != NEW.email"));
//! # Ok::<(), histgen_core::error::CoreError>(())
//! ```

pub mod ddl;
pub mod error;
pub mod naming;
pub mod schema;
pub mod trigger;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ddl::create_table_sql;
    pub use crate::error::{CoreError, Result};
    pub use crate::schema::{Column, TableSpec};
    pub use crate::trigger::{after_insert_trigger_sql, after_update_trigger_sql};
    pub use crate::{render_artifacts, GeneratedArtifacts};
}

use schema::TableSpec;

/// The three generated SQL artifacts for one table.
///
/// The blobs are independent: each is renderable on its own, and nothing ties
/// them together beyond having come from the same [`TableSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    /// `CREATE TABLE` statement for the history table.
    pub create_table: String,
    /// `AFTER INSERT` trigger SQL.
    pub after_insert_trigger: String,
    /// `AFTER UPDATE` trigger SQL.
    pub after_update_trigger: String,
}

/// Renders all three artifacts for the given table spec.
#[must_use]
pub fn render_artifacts(spec: &TableSpec) -> GeneratedArtifacts {
    GeneratedArtifacts {
        create_table: ddl::create_table_sql(spec),
        after_insert_trigger: trigger::after_insert_trigger_sql(spec),
        after_update_trigger: trigger::after_update_trigger_sql(spec),
    }
}
