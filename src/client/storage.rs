use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use crate::client::{ClientError, ClientResult};

/// Key under which the user's provider key is kept.
pub const API_KEY_STORAGE_KEY: &str = "cerebras_api_key";

const SETTINGS_DIR: &str = "open-brilliant";
const SETTINGS_FILE: &str = "settings.json";

/// Small persistent key-value capability, the local-storage equivalent.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;
    fn clear(&self, key: &str) -> ClientResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.entries
            .write()
            .map_err(|e| ClientError::Storage(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> ClientResult<()> {
        self.entries
            .write()
            .map_err(|e| ClientError::Storage(e.to_string()))?
            .remove(key);
        Ok(())
    }
}

/// JSON-file backed store, by default `<config dir>/open-brilliant/settings.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> ClientResult<Self> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join(SETTINGS_DIR).join(SETTINGS_FILE)))
            .ok_or_else(|| {
                ClientError::Storage("config directory not found, cannot store settings".into())
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as empty. So does an unreadable one, which the
    /// next write replaces.
    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring unreadable settings file {} ({}); it will be replaced on the next save",
                self.path.display(),
                e
            );
            BTreeMap::new()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ClientError::Storage(format!("mkdir {}: {e}", parent.display()))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        fs::write(&self.path, content)
            .map_err(|e| ClientError::Storage(format!("write {}: {e}", self.path.display())))?;

        // The file holds credentials.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                ClientError::Storage(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn clear(&self, key: &str) -> ClientResult<()> {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// The provider key as the settings panel sees it.
pub struct ApiKeyStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ApiKeyStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<String> {
        self.store
            .get(API_KEY_STORAGE_KEY)
            .filter(|key| !key.trim().is_empty())
    }

    /// Saving an empty value clears the stored key.
    pub fn save(&self, api_key: &str) -> ClientResult<()> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            self.store.clear(API_KEY_STORAGE_KEY)
        } else {
            self.store.set(API_KEY_STORAGE_KEY, api_key)
        }
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.store.clear(API_KEY_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_clear() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.clear("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        FileStore::new(&path).set(API_KEY_STORAGE_KEY, "csk-1").unwrap();
        let reopened = FileStore::new(&path);

        assert_eq!(reopened.get(API_KEY_STORAGE_KEY).as_deref(), Some("csk-1"));
    }

    #[cfg(unix)]
    #[test]
    fn file_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));
        store.set("k", "v").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn file_store_missing_or_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(FileStore::new(&path).get("k"), None);

        fs::write(&path, "not json").unwrap();
        assert_eq!(FileStore::new(&path).get("k"), None);
    }

    #[test]
    fn file_store_replaces_corrupt_file_with_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{\"cerebras_api_key\": ").unwrap();

        let store = FileStore::new(&path);
        store.set("k", "v").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(entries.get("k").map(String::as_str), Some("v"));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn api_key_store_clears_on_empty_save() {
        let keys = ApiKeyStore::new(MemoryStore::new());

        keys.save("  csk-abc ").unwrap();
        assert_eq!(keys.load().as_deref(), Some("csk-abc"));

        keys.save("").unwrap();
        assert_eq!(keys.load(), None);
    }
}
