//! Live schema introspection.

use anyhow::{bail, Context};
use sqlx::mysql::MySqlPool;
use tracing::debug;

use histgen_core::schema::Column;

/// Fetches the column list for a table, in declaration order.
///
/// Queries `information_schema.columns` rather than `DESCRIBE` so the result
/// can be bound with placeholders; `ORDINAL_POSITION` ordering matches the
/// table's declaration order, which the generated artifacts preserve.
pub async fn table_columns(
    pool: &MySqlPool,
    schema: &str,
    table: &str,
) -> anyhow::Result<Vec<Column>> {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT COLUMN_NAME, COLUMN_TYPE \
         FROM information_schema.columns \
         WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? \
         ORDER BY ORDINAL_POSITION",
    )
    .bind(schema)
    .bind(table)
    .fetch_all(pool)
    .await
    .with_context(|| format!("describing table '{table}'"))?;

    if rows.is_empty() {
        bail!("table '{table}' not found in database '{schema}'");
    }

    for (name, sql_type) in &rows {
        debug!("column {name}: {sql_type}");
    }

    Ok(rows
        .into_iter()
        .map(|(name, sql_type)| Column::new(name, sql_type))
        .collect())
}
