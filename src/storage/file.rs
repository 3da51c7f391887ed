//! JSON-file storage backend (native only).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::StorageError;
use crate::storage::TokenStorage;

/// Key-value store persisted as a flat JSON object on disk.
///
/// The file is re-read on every [`get_item`](TokenStorage::get_item), so values
/// written by another process are picked up on the next request. Writes go
/// through a uniquely named sibling temp file and an atomic rename, so other
/// stores in the same directory and other processes never see partial data.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // Unique name per write: concurrent writers never share a temp file.
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, items)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn update(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("file storage lock poisoned".into()))?;
        let mut items = self.read_all()?;
        f(&mut items);
        self.write_all(&items)
    }
}

impl TokenStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut items) => items.remove(key),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read storage file"
                );
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get_item("accessToken"), None);
    }

    #[test]
    fn test_values_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileStorage::new(&path)
            .set_item("accessToken", "abc123")
            .unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item("accessToken").as_deref(), Some("abc123"));

        reopened.remove_item("accessToken").unwrap();
        assert_eq!(FileStorage::new(&path).get_item("accessToken"), None);
    }

    #[test]
    fn test_external_writes_are_seen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::new(&path);

        fs::write(&path, r#"{"accessToken":"written-elsewhere"}"#).unwrap();
        assert_eq!(
            storage.get_item("accessToken").as_deref(),
            Some("written-elsewhere")
        );
    }

    #[test]
    fn test_sibling_files_with_same_stem_stay_separate() {
        let dir = tempfile::tempdir().unwrap();
        let json = Arc::new(FileStorage::new(dir.path().join("vault.json")));
        let dat = Arc::new(FileStorage::new(dir.path().join("vault.dat")));

        for round in 0..100 {
            let a = {
                let json = json.clone();
                thread::spawn(move || json.set_item("accessToken", &format!("a{round}")))
            };
            let b = {
                let dat = dat.clone();
                thread::spawn(move || dat.set_item("otherKey", &format!("b{round}")))
            };
            a.join().unwrap().unwrap();
            b.join().unwrap().unwrap();

            assert_eq!(json.get_item("otherKey"), None, "round {round}");
            assert_eq!(dat.get_item("accessToken"), None, "round {round}");
        }

        assert_eq!(json.get_item("accessToken").as_deref(), Some("a99"));
        assert_eq!(dat.get_item("otherKey").as_deref(), Some("b99"));

        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["vault.dat", "vault.json"]);
    }

    #[test]
    fn test_concurrent_writers_on_same_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = FileStorage::new(&path);
                thread::spawn(move || {
                    for _ in 0..20 {
                        store.set_item("accessToken", &format!("t{i}"))?;
                    }
                    Ok::<_, StorageError>(())
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let token = FileStorage::new(&path).get_item("accessToken").unwrap();
        assert!(token.starts_with('t'));
    }

    #[test]
    fn test_malformed_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("accessToken"), None);
        assert!(matches!(
            storage.set_item("accessToken", "abc"),
            Err(StorageError::Serde(_))
        ));
    }
}
