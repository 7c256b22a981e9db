// CSV export of the check-in roster
//
// One row per recorded identifier, newline-terminated, written to
// <export_dir>/<name>.csv (the filename is fixed by the record-set name).
// Rows go to a temporary file first and are renamed into place; a failed
// write removes the temporary so nothing half-finished is left behind.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize the rows and return the path of the finished export.
///
/// Callers guard the empty case beforehand (it is surfaced to the operator
/// as a notice dialog); an empty slice here is refused without touching the
/// filesystem.
pub fn export_csv(rows: &[String], export_dir: &Path, name: &str) -> Result<PathBuf> {
    if rows.is_empty() {
        bail!("Export invoked with an empty record set");
    }

    fs::create_dir_all(export_dir).context("Failed to create export directory")?;
    let final_path = export_dir.join(format!("{name}.csv"));
    let tmp_path = export_dir.join(format!("{name}.csv.tmp"));

    if let Err(e) = write_rows(&tmp_path, rows) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    // Renaming over an existing file fails on Windows, so drop any previous
    // export first.
    let _ = fs::remove_file(&final_path);
    if let Err(e) = fs::rename(&tmp_path, &final_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).context("Failed to move export into place");
    }

    tracing::info!("Exported {} rows to {}", rows.len(), final_path.display());
    Ok(final_path)
}

fn write_rows(path: &Path, rows: &[String]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    for id in rows {
        writer
            .write_record([id.as_str()])
            .context("Failed to write export row")?;
    }
    writer.flush().context("Failed to flush export file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_one_row_per_identifier_in_order() {
        let dir = TempDir::new().unwrap();
        let rows = vec!["1001".to_string(), "2002".to_string(), "3003".to_string()];

        let path = export_csv(&rows, dir.path(), "checkins").unwrap();

        assert_eq!(path, dir.path().join("checkins.csv"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1001\n2002\n3003\n");
        // The transient file is gone once the export landed
        assert!(!dir.path().join("checkins.csv.tmp").exists());
    }

    #[test]
    fn empty_record_set_creates_nothing() {
        let dir = TempDir::new().unwrap();

        assert!(export_csv(&[], dir.path(), "checkins").is_err());

        assert!(!dir.path().join("checkins.csv").exists());
        assert!(!dir.path().join("checkins.csv.tmp").exists());
    }

    #[test]
    fn second_export_replaces_the_first() {
        let dir = TempDir::new().unwrap();
        export_csv(&["1001".to_string()], dir.path(), "checkins").unwrap();
        export_csv(
            &["1001".to_string(), "2002".to_string()],
            dir.path(),
            "checkins",
        )
        .unwrap();

        let content = fs::read_to_string(dir.path().join("checkins.csv")).unwrap();
        assert_eq!(content, "1001\n2002\n");
    }

    #[test]
    fn export_dir_is_created_on_demand() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("csv");

        let path = export_csv(&["1001".to_string()], &nested, "checkins").unwrap();
        assert!(path.exists());
    }
}
