//! Persistent key-value store for small UI preferences
//!
//! The only key written today is `theme`, but the store is a flat string map
//! so new preferences don't need a schema change.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String-to-string storage that survives restarts
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value and persist it immediately
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by a flat TOML table on disk (e.g. `~/.lotto-face/state.toml`)
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file doesn't exist yet.
    ///
    /// A corrupt file is logged and treated as empty; it gets overwritten on
    /// the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable state file {:?}: {:#}", path, e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            tracing::debug!("No state file at {:?}, starting fresh", path);
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {:?}", path))?;
        let entries = toml::from_str(&content)
            .with_context(|| format!("Failed to parse state file: {:?}", path))?;
        tracing::info!("State loaded from {:?}", path);
        Ok(entries)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(&self.entries).context("Failed to serialize state")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write state file: {:?}", self.path))?;
        tracing::debug!("State saved to {:?}", self.path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory store (used by tests and the headless `draw` command)
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("lotto-face-store-{}-{}", name, std::process::id()))
            .join("state.toml")
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = temp_state_path("persist");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);
        store.set("theme", "light").expect("write state");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme").as_deref(), Some("light"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let path = temp_state_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "this is = = not toml").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").expect("overwrite state");
        assert_eq!(FileStore::open(&path).get("theme").as_deref(), Some("dark"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new().with_entry("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get("missing"), None);
    }
}
