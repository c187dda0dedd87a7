//! Namespaced key/value application settings persisted as one JSON file.
//!
//! The file holds a single JSON object whose top-level keys are namespaces,
//! each an object of arbitrary settings. The whole document is cached in
//! memory; every write replaces the namespace in the cache and rewrites the
//! entire file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Failed to persist the settings document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The cached document could not be serialized.
    #[error("Failed to serialize settings document:\n{0}")]
    Serialize(#[source] serde_json::Error),

    /// The file could not be replaced.
    #[error("Failed to write settings file:\n{0}")]
    Write(#[from] io::Error),
}

/// A namespaced settings store over one JSON file.
pub struct SettingsStore {
    path: PathBuf,
    document: Mutex<Map<String, Value>>,
}

impl SettingsStore {
    /// Load the store from `path`.
    ///
    /// A missing, unreadable, or unparseable file silently becomes an empty
    /// document; load never surfaces an error to the caller.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let document = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(document) => document,
                Err(error) => {
                    warn!("Settings file is not a JSON object, starting empty:\n{error}");
                    Map::new()
                }
            },

            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!("No settings file at {}, starting empty", path.display());
                Map::new()
            }

            Err(error) => {
                warn!("Failed to read settings file, starting empty:\n{error}");
                Map::new()
            }
        };

        Self {
            path,
            document: Mutex::new(document),
        }
    }

    /// Read a typed value, falling back to `default` on a missing namespace
    /// or key, a type mismatch, or a malformed enum token.
    ///
    /// Enum settings are any `Deserialize` type: a C-like enum accepts its
    /// variant names, and conversion failure of any kind yields the default
    /// rather than an error.
    pub fn get_or_default<T: DeserializeOwned>(&self, namespace: &str, key: &str, default: T) -> T {
        let document = self.document.lock();

        let Some(Value::Object(settings)) = document.get(namespace) else {
            return default;
        };
        let Some(value) = settings.get(key) else {
            return default;
        };

        serde_json::from_value(value.clone()).unwrap_or(default)
    }

    /// Replace one namespace and rewrite the file from the cached document.
    pub fn write(&self, namespace: &str, settings: Map<String, Value>) -> Result<(), WriteError> {
        let mut document = self.document.lock();
        document.insert(namespace.to_owned(), Value::Object(settings));

        let serialized =
            serde_json::to_string_pretty(&*document).map_err(WriteError::Serialize)?;
        fs::write(&self.path, serialized)?;

        Ok(())
    }

    /// Where the document is persisted.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
