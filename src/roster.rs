// Roster - the record set of identifiers already checked in
//
// Backed by a simple key list on disk: one identifier per line in
// <data_dir>/<name>.list. The whole list is loaded once at startup; an
// insert appends a line and flushes immediately so a crash never loses a
// check-in, a reset truncates the file. All mutation happens synchronously
// inside the event loop, so no locking is needed.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The in-memory record set plus its backing key-list file.
///
/// Insertion order is preserved because export wants rows in the order
/// people checked in; the HashSet is only a presence index over `ids`.
pub struct Roster {
    path: PathBuf,
    ids: Vec<String>,
    index: HashSet<String>,
}

impl Roster {
    /// Load the roster for `name` from `data_dir`, creating the directory if
    /// it does not exist yet. A missing key-list file yields an empty roster
    /// (first run).
    pub fn load(data_dir: &Path, name: &str) -> Result<Self> {
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;
        let path = data_dir.join(format!("{name}.list"));

        let mut ids = Vec::new();
        let mut index = HashSet::new();

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read key list {}", path.display()))?;
            for line in contents.lines() {
                let id = line.trim();
                if id.is_empty() {
                    continue;
                }
                if index.insert(id.to_string()) {
                    ids.push(id.to_string());
                } else {
                    tracing::warn!("Skipping duplicate key-list entry: {}", crate::util::mask_id(id));
                }
            }
        }

        tracing::debug!("Roster loaded: {} ids from {}", ids.len(), path.display());
        Ok(Self { path, ids, index })
    }

    /// Whether this identifier has already checked in.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    /// Record a first-time identifier: append to the key list and flush.
    ///
    /// Inserting an identifier that is already present is a no-op (the
    /// check-in handler never does this, but the roster stays consistent
    /// even if a caller skips the presence check).
    pub fn insert(&mut self, id: &str) -> Result<()> {
        if !self.index.insert(id.to_string()) {
            tracing::warn!("Ignoring repeat insert for {}", crate::util::mask_id(id));
            return Ok(());
        }
        self.ids.push(id.to_string());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open key list {}", self.path.display()))?;
        writeln!(file, "{id}").context("Failed to append to key list")?;
        file.flush().context("Failed to flush key list")?;

        Ok(())
    }

    /// Drop every recorded identifier and truncate the key list.
    ///
    /// The truncate comes first: if it fails the in-memory set is left
    /// untouched, so memory and disk still agree.
    pub fn clear(&mut self) -> Result<()> {
        fs::write(&self.path, "")
            .with_context(|| format!("Failed to truncate key list {}", self.path.display()))?;
        self.ids.clear();
        self.index.clear();
        Ok(())
    }

    /// All recorded identifiers in check-in order, for export.
    pub fn rows(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Path of the backing key-list file (for the startup banner).
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = scratch();
        let roster = Roster::load(dir.path(), "party").unwrap();
        assert!(roster.is_empty());
        assert!(!roster.contains("1001"));
    }

    #[test]
    fn insert_persists_across_reload() {
        let dir = scratch();
        {
            let mut roster = Roster::load(dir.path(), "party").unwrap();
            roster.insert("1001").unwrap();
            roster.insert("2002").unwrap();
        }
        let roster = Roster::load(dir.path(), "party").unwrap();
        assert_eq!(roster.rows(), ["1001", "2002"]);
        assert!(roster.contains("1001"));
        assert!(roster.contains("2002"));
    }

    #[test]
    fn insert_is_exactly_once() {
        let dir = scratch();
        let mut roster = Roster::load(dir.path(), "party").unwrap();
        roster.insert("1001").unwrap();
        roster.insert("1001").unwrap();
        assert_eq!(roster.len(), 1);

        let on_disk = fs::read_to_string(roster.path()).unwrap();
        assert_eq!(on_disk, "1001\n");
    }

    #[test]
    fn clear_empties_memory_and_file() {
        let dir = scratch();
        let mut roster = Roster::load(dir.path(), "party").unwrap();
        roster.insert("1001").unwrap();
        roster.clear().unwrap();

        assert!(roster.is_empty());
        assert!(!roster.contains("1001"));
        assert_eq!(fs::read_to_string(roster.path()).unwrap(), "");

        // A cleared identifier is a first-timer again
        roster.insert("1001").unwrap();
        assert_eq!(roster.rows(), ["1001"]);
    }

    #[test]
    fn failed_clear_leaves_the_roster_intact() {
        let dir = scratch();
        let mut roster = Roster::load(dir.path(), "party").unwrap();
        roster.insert("1001").unwrap();

        // A directory at the key-list path makes the truncate fail
        fs::remove_file(roster.path()).unwrap();
        fs::create_dir(roster.path()).unwrap();

        assert!(roster.clear().is_err());
        assert!(roster.contains("1001"));
        assert_eq!(roster.rows(), ["1001"]);

        // Once the path is writable again the same clear goes through
        fs::remove_dir(roster.path()).unwrap();
        roster.clear().unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn load_skips_blank_and_duplicate_lines() {
        let dir = scratch();
        let path = dir.path().join("party.list");
        fs::write(&path, "1001\n\n  \n1001\n2002\n").unwrap();

        let roster = Roster::load(dir.path(), "party").unwrap();
        assert_eq!(roster.rows(), ["1001", "2002"]);
    }

    #[test]
    fn load_trims_surrounding_whitespace() {
        let dir = scratch();
        let path = dir.path().join("party.list");
        fs::write(&path, " 1001 \r\n2002\n").unwrap();

        let roster = Roster::load(dir.path(), "party").unwrap();
        assert_eq!(roster.rows(), ["1001", "2002"]);
    }
}
