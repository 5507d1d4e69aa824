use super::DataStore;
use crate::error::{RosterError, Result};
use crate::model::Roster;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Roster> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file missing, starting empty");
            return Ok(Roster::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        let roster: Roster = serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        debug!(path = %self.path.display(), users = roster.len(), "loaded users");
        Ok(roster)
    }

    fn save(&mut self, roster: &Roster) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(roster).map_err(RosterError::Serialization)?;
        fs::write(&self.path, content).map_err(RosterError::Io)?;
        debug!(path = %self.path.display(), users = roster.len(), "saved users");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("data.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let roster = store.load().unwrap();
        assert!(roster.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_keeps_fields_and_order() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let roster = Roster::from(vec![
            User::new("Zed", 50, "z@x.com"),
            User::new("Alice", 30, "a@x.com"),
            User::new("Émile", -3, ""),
        ]);

        store.save(&roster).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, roster);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&Roster::from(vec![
                User::new("Alice", 30, "a@x.com"),
                User::new("Bob", 25, "b@x.com"),
            ]))
            .unwrap();
        store
            .save(&Roster::from(vec![User::new("Carol", 41, "c@x.com")]))
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.users()[0].name, "Carol");
    }

    #[test]
    fn writes_indented_array() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&Roster::from(vec![User::new("Alice", 30, "a@x.com")]))
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let expected = "[\n  {\n    \"name\": \"Alice\",\n    \"age\": 30,\n    \"email\": \"a@x.com\"\n  }\n]";
        assert_eq!(raw, expected);
    }

    #[test]
    fn empty_roster_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&Roster::new()).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, RosterError::Serialization(_)));
    }

    #[test]
    fn empty_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "").unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            RosterError::Serialization(_)
        ));
    }

    #[test]
    fn non_integer_age_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"name":"Alice","age":"thirty","email":"a@x.com"}]"#,
        )
        .unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            RosterError::Serialization(_)
        ));
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("users.json"));
        store
            .save(&Roster::from(vec![User::new("Alice", 30, "a@x.com")]))
            .unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.load().unwrap_err(), RosterError::Io(_)));
    }
}
