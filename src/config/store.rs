//! Settings store: one JSON object on disk, typed access in memory
//!
//! The document is loaded once when the store is opened and written back
//! only by [`Settings::save`]. Keys no accessor knows about are kept as-is.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::error::{Result, SettingsError};
use super::paths;
use super::value::{kind_name, SettingValue};

#[derive(Debug)]
pub struct Settings {
    path: PathBuf,
    document: Map<String, Value>,
    dirty: bool,
}

impl Settings {
    /// Open the settings file in the platform data directory
    pub fn open() -> Result<Self> {
        Self::open_at(paths::settings_path()?)
    }

    /// Open a specific settings file
    ///
    /// A missing file yields an empty document. Any other read failure,
    /// malformed JSON, or a non-object top level is an error.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = load_document(&path)?;
        Ok(Self {
            path,
            document,
            dirty: false,
        })
    }

    /// An empty store bound to `path`, without touching the filesystem
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: Map::new(),
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole document, pretty-printed, creating the parent directory
    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
                debug!(dir = %parent.display(), "Created settings directory");
            }
        }

        let mut contents = serde_json::to_string_pretty(&self.document)?;
        contents.push('\n');

        // Readers only ever see the old file or the complete new one
        let temp_path = temp_path_for(&self.path);
        write_synced(&temp_path, contents.as_bytes())
            .map_err(|e| SettingsError::io(&temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(SettingsError::io(&self.path, e));
        }

        self.dirty = false;
        info!(path = %self.path.display(), keys = self.document.len(), "Saved settings");
        Ok(())
    }

    /// Save only when something changed since load or the last save
    ///
    /// Returns whether a write happened.
    pub fn save_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Stored value for `name`, or `default` when the key is absent
    ///
    /// A present value of the wrong kind or width is an error, never the default.
    pub fn get_or_default<T: SettingValue>(&self, name: &str, default: T) -> Result<T> {
        match self.document.get(name) {
            Some(value) => T::decode(name, value),
            None => Ok(default),
        }
    }

    /// Insert or overwrite `name`; persisted on the next save
    pub fn set<T: SettingValue>(&mut self, name: &str, value: T) {
        let value = value.encode();
        debug!(key = name, kind = kind_name(&value), "Setting value");
        self.document.insert(name.to_string(), value);
        self.dirty = true;
    }

    /// Drop the stored value so the built-in default applies again
    ///
    /// Returns whether the key was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.document.shift_remove(name).is_some();
        if removed {
            debug!(key = name, "Removed value");
            self.dirty = true;
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.document.contains_key(name)
    }

    /// Stored keys in document order, including ones no accessor reads
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub(crate) fn raw(&self, name: &str) -> Option<&Value> {
        self.document.get(name)
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn load_document(path: &Path) -> Result<Map<String, Value>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No settings file found, using defaults");
            return Ok(Map::new());
        }
        Err(e) => return Err(SettingsError::io(path, e)),
    };

    let value: Value = serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(document) => {
            info!(path = %path.display(), keys = document.len(), "Loaded settings");
            Ok(document)
        }
        other => Err(SettingsError::NotAnObject {
            path: path.to_path_buf(),
            found: kind_name(&other),
        }),
    }
}
