//! Output sink for the generated SQL artifacts.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use histgen_core::GeneratedArtifacts;

/// File name for the history-table DDL.
pub const CREATE_TABLE_FILE: &str = "create_table.sql";
/// File name for the insert trigger.
pub const AFTER_INSERT_FILE: &str = "after_insert_trigger.sql";
/// File name for the update trigger.
pub const AFTER_UPDATE_FILE: &str = "after_update_trigger.sql";

/// Writes the three artifacts into `dir`, creating it if absent.
///
/// Existing files are replaced without confirmation.
pub fn write_artifacts(dir: &Path, artifacts: &GeneratedArtifacts) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    fs::write(dir.join(CREATE_TABLE_FILE), &artifacts.create_table)?;
    fs::write(dir.join(AFTER_INSERT_FILE), &artifacts.after_insert_trigger)?;
    fs::write(dir.join(AFTER_UPDATE_FILE), &artifacts.after_update_trigger)?;

    info!("wrote 3 SQL files to {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_artifacts() -> GeneratedArtifacts {
        GeneratedArtifacts {
            create_table: "CREATE TABLE t_history (...);\n".to_string(),
            after_insert_trigger: "CREATE TRIGGER trg_t_after_insert ...\n".to_string(),
            after_update_trigger: "CREATE TRIGGER trg_t_after_update ...\n".to_string(),
        }
    }

    #[test]
    fn test_write_artifacts_creates_all_files() {
        let dir = tempfile::tempdir().unwrap();

        write_artifacts(dir.path(), &sample_artifacts()).unwrap();

        let ddl = fs::read_to_string(dir.path().join(CREATE_TABLE_FILE)).unwrap();
        assert!(ddl.contains("t_history"));
        assert!(dir.path().join(AFTER_INSERT_FILE).exists());
        assert!(dir.path().join(AFTER_UPDATE_FILE).exists());
    }

    #[test]
    fn test_write_artifacts_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("sql");

        write_artifacts(&nested, &sample_artifacts()).unwrap();
        assert!(nested.join(CREATE_TABLE_FILE).exists());
    }

    #[test]
    fn test_write_artifacts_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CREATE_TABLE_FILE), "stale").unwrap();

        write_artifacts(dir.path(), &sample_artifacts()).unwrap();

        let ddl = fs::read_to_string(dir.path().join(CREATE_TABLE_FILE)).unwrap();
        assert!(!ddl.contains("stale"));
    }
}
