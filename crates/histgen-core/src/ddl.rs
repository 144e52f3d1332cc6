//! History-table DDL rendering.

use crate::naming;
use crate::schema::TableSpec;

/// Generates the `CREATE TABLE` statement for the history table.
///
/// Column layout, in order: a surrogate auto-increment primary key, a copy of
/// the source primary key named `{table}_{pk}`, then an `old_`/`new_` pair
/// per tracked column. Source types are copied verbatim; no constraints are
/// added beyond the surrogate primary key.
#[must_use]
pub fn create_table_sql(spec: &TableSpec) -> String {
    let mut col_defs = Vec::with_capacity(2 + spec.tracked.len() * 2);
    col_defs.push("id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY".to_string());
    col_defs.push(format!(
        "{} {}",
        naming::pk_column_name(&spec.table, &spec.primary_key.name),
        spec.primary_key.sql_type
    ));

    for column in &spec.tracked {
        col_defs.push(format!(
            "{} {}",
            naming::old_column_name(&column.name),
            column.sql_type
        ));
        col_defs.push(format!(
            "{} {}",
            naming::new_column_name(&column.name),
            column.sql_type
        ));
    }

    let mut sql = String::from("CREATE TABLE ");
    sql.push_str(&naming::history_table_name(&spec.table));
    sql.push_str(" (\n  ");
    sql.push_str(&col_defs.join(",\n  "));
    sql.push_str("\n);\n");
    sql
}
