//! Audit trigger rendering.
//!
//! Both triggers insert into the history table produced by
//! [`crate::ddl::create_table_sql`]. The bodies are wrapped in
//! `DELIMITER $$ ... DELIMITER ;` so the output files can be fed to the
//! `mysql` client as-is.

use crate::naming;
use crate::schema::TableSpec;

/// Generates the `AFTER INSERT` trigger.
///
/// Captures the post-insert state of the row: the new primary key value into
/// the `{table}_{pk}` column, then `new_{col}` per tracked column. There is
/// no `old_` side because the row did not previously exist.
#[must_use]
pub fn after_insert_trigger_sql(spec: &TableSpec) -> String {
    let mut columns = vec![naming::pk_column_name(&spec.table, &spec.primary_key.name)];
    let mut values = vec![format!("NEW.{}", spec.primary_key.name)];

    for column in &spec.tracked {
        columns.push(naming::new_column_name(&column.name));
        values.push(format!("NEW.{}", column.name));
    }

    format!(
        r"DELIMITER $$

CREATE TRIGGER trg_{table}_after_insert
AFTER INSERT ON {table}
FOR EACH ROW
BEGIN
    INSERT INTO {history} (
        {columns}
    ) VALUES (
        {values}
    );
END$$

DELIMITER ;
",
        table = spec.table,
        history = naming::history_table_name(&spec.table),
        columns = columns.join(",\n        "),
        values = values.join(",\n        "),
    )
}

/// Generates the `AFTER UPDATE` trigger.
///
/// A history row is written only when at least one tracked column actually
/// changed; the guard is an OR over `OLD.{col} != NEW.{col}` comparisons.
/// The primary key is excluded from the guard, so a key-only update logs
/// nothing. The inserted row carries the pre-update key plus an
/// `old_`/`new_` value pair per tracked column.
#[must_use]
pub fn after_update_trigger_sql(spec: &TableSpec) -> String {
    let mut columns = vec![naming::pk_column_name(&spec.table, &spec.primary_key.name)];
    let mut values = vec![format!("OLD.{}", spec.primary_key.name)];
    let mut conditions = Vec::with_capacity(spec.tracked.len());

    for column in &spec.tracked {
        columns.push(naming::old_column_name(&column.name));
        values.push(format!("OLD.{}", column.name));

        columns.push(naming::new_column_name(&column.name));
        values.push(format!("NEW.{}", column.name));

        conditions.push(format!("OLD.{name} != NEW.{name}", name = column.name));
    }

    format!(
        r"DELIMITER $$

CREATE TRIGGER trg_{table}_after_update
AFTER UPDATE ON {table}
FOR EACH ROW
BEGIN
    IF {guard} THEN
        INSERT INTO {history} (
            {columns}
        ) VALUES (
            {values}
        );
    END IF;
END$$

DELIMITER ;
",
        table = spec.table,
        guard = conditions.join(" OR\n       "),
        history = naming::history_table_name(&spec.table),
        columns = columns.join(",\n            "),
        values = values.join(",\n            "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;

    fn users_spec() -> TableSpec {
        TableSpec::new(
            "users",
            Column::new("id", "INT"),
            vec![
                Column::new("name", "VARCHAR(255)"),
                Column::new("email", "VARCHAR(255)"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_after_insert_users() {
        let sql = after_insert_trigger_sql(&users_spec());

        assert_eq!(
            sql,
            "DELIMITER $$\n\
             \n\
             CREATE TRIGGER trg_users_after_insert\n\
             AFTER INSERT ON users\n\
             FOR EACH ROW\n\
             BEGIN\n\
             \x20   INSERT INTO users_history (\n\
             \x20       users_id,\n\
             \x20       new_name,\n\
             \x20       new_email\n\
             \x20   ) VALUES (\n\
             \x20       NEW.id,\n\
             \x20       NEW.name,\n\
             \x20       NEW.email\n\
             \x20   );\n\
             END$$\n\
             \n\
             DELIMITER ;\n"
        );
    }

    #[test]
    fn test_after_update_users() {
        let sql = after_update_trigger_sql(&users_spec());

        assert_eq!(
            sql,
            "DELIMITER $$\n\
             \n\
             CREATE TRIGGER trg_users_after_update\n\
             AFTER UPDATE ON users\n\
             FOR EACH ROW\n\
             BEGIN\n\
             \x20   IF OLD.name != NEW.name OR\n\
             \x20      OLD.email != NEW.email THEN\n\
             \x20       INSERT INTO users_history (\n\
             \x20           users_id,\n\
             \x20           old_name,\n\
             \x20           new_name,\n\
             \x20           old_email,\n\
             \x20           new_email\n\
             \x20       ) VALUES (\n\
             \x20           OLD.id,\n\
             \x20           OLD.name,\n\
             \x20           NEW.name,\n\
             \x20           OLD.email,\n\
             \x20           NEW.email\n\
             \x20       );\n\
             \x20   END IF;\n\
             END$$\n\
             \n\
             DELIMITER ;\n"
        );
    }

    #[test]
    fn test_insert_trigger_column_count() {
        let spec = users_spec();
        let sql = after_insert_trigger_sql(&spec);

        assert_eq!(sql.matches("NEW.").count(), 1 + spec.tracked.len());
        assert_eq!(sql.matches("new_").count(), spec.tracked.len());
    }

    #[test]
    fn test_update_trigger_column_count() {
        let spec = users_spec();
        let sql = after_update_trigger_sql(&spec);

        // One old_/new_ pair per tracked column in the insert list.
        assert_eq!(sql.matches("old_").count(), spec.tracked.len());
        assert_eq!(sql.matches("new_").count(), spec.tracked.len());
    }

    #[test]
    fn test_update_guard_one_comparison_per_tracked_column() {
        let spec = users_spec();
        let sql = after_update_trigger_sql(&spec);

        assert_eq!(sql.matches("!=").count(), spec.tracked.len());
        assert_eq!(sql.matches(" OR\n").count(), spec.tracked.len() - 1);
    }

    #[test]
    fn test_update_guard_excludes_primary_key() {
        let sql = after_update_trigger_sql(&users_spec());

        assert!(!sql.contains("OLD.id != NEW.id"));
        // The pre-update key is still recorded.
        assert!(sql.contains("OLD.id"));
    }

    #[test]
    fn test_trigger_names() {
        let spec = users_spec();

        assert!(after_insert_trigger_sql(&spec).contains("CREATE TRIGGER trg_users_after_insert"));
        assert!(after_update_trigger_sql(&spec).contains("CREATE TRIGGER trg_users_after_update"));
    }

    #[test]
    fn test_single_tracked_column_guard_has_no_or() {
        let spec = TableSpec::new(
            "users",
            Column::new("id", "INT"),
            vec![Column::new("name", "VARCHAR(255)")],
        )
        .unwrap();

        let sql = after_update_trigger_sql(&spec);
        assert!(sql.contains("IF OLD.name != NEW.name THEN"));
        assert!(!sql.contains(" OR"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let spec = users_spec();

        assert_eq!(after_insert_trigger_sql(&spec), after_insert_trigger_sql(&spec));
        assert_eq!(after_update_trigger_sql(&spec), after_update_trigger_sql(&spec));
    }
}
