use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::WidgetResult;

use super::kv::{KeyValueStore, StoreKey};

/// File-backed store: one JSON document per record
///
/// The durable half of the widget on native hosts. Each record lives at
/// `<dir>/<key>.json`; the directory is only created on first write, so a
/// read-only environment degrades to "no records yet" instead of failing
/// at construction.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store at the configured directory, falling back to the
    /// platform-local data dir
    pub fn from_config(config: &Config) -> Self {
        match &config.storage_dir {
            Some(dir) => Self::new(dir.clone()),
            None => Self::new(Self::default_data_dir()),
        }
    }

    /// Platform-local data directory for widget records
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("alsolike")
    }

    fn record_path(&self, key: &StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &StoreKey) -> WidgetResult<Option<String>> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &StoreKey, value: &str) -> WidgetResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.record_path(key), value)?;
        Ok(())
    }
}
