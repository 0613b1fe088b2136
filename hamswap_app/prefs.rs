//! Client-durable view preferences. The only persisted piece of discovery
//! state is the grid/list view mode, stored under a single key and
//! rehydrated once per mount.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use hamswap_types::errors::ApplicationError;

pub const VIEW_MODE_KEY: &str = "listings-view-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// Narrow key/value store for durable client preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}

/// JSON-file-backed store, one flat object per file. Writes are
/// last-writer-wins; callers are UI-thread-serial so no locking beyond the
/// internal mutex is needed.
pub struct FilePreferenceStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, ApplicationError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(ApplicationError::Infrastructure(e.to_string())),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        std::fs::write(&self.path, serde_json::to_string_pretty(&all)?)
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> ApplicationError {
    ApplicationError::Infrastructure("preference store lock poisoned".to_string())
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let values = self.values.lock().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let mut values = self.values.lock().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// View-mode preference with an explicit hydration flag, so the initial
/// render and the persisted-value render can be reconciled without flicker.
pub struct ViewModePrefs {
    store: Arc<dyn PreferenceStore>,
    view_mode: ViewMode,
    hydrated: bool,
}

impl ViewModePrefs {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            view_mode: ViewMode::default(),
            hydrated: false,
        }
    }

    /// Read the persisted value once. Store failures or unknown values fall
    /// back to the default; hydration still completes.
    pub fn hydrate(&mut self) {
        match self.store.get(VIEW_MODE_KEY) {
            Ok(Some(raw)) => {
                self.view_mode = ViewMode::from_str(&raw).unwrap_or_default();
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to load {VIEW_MODE_KEY}: {e}");
            }
        }
        self.hydrated = true;
    }

    pub fn has_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Write-through set. A failed write keeps the in-memory value.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
        if let Err(e) = self.store.set(VIEW_MODE_KEY, view_mode.as_str()) {
            tracing::warn!("Failed to persist {VIEW_MODE_KEY}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrate_flips_the_flag_exactly_once() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut prefs = ViewModePrefs::new(store);

        assert!(!prefs.has_hydrated());
        prefs.hydrate();
        assert!(prefs.has_hydrated());
        assert_eq!(prefs.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_set_persists_and_rehydrates() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut prefs = ViewModePrefs::new(store.clone());
        prefs.hydrate();
        prefs.set_view_mode(ViewMode::List);

        assert_eq!(store.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("list"));

        let mut remounted = ViewModePrefs::new(store);
        remounted.hydrate();
        assert_eq!(remounted.view_mode(), ViewMode::List);
    }

    #[test]
    fn test_unknown_persisted_value_falls_back_to_default() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(VIEW_MODE_KEY, "mosaic").unwrap();

        let mut prefs = ViewModePrefs::new(store);
        prefs.hydrate();
        assert_eq!(prefs.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("hamswap-prefs-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let store = FilePreferenceStore::new(dir.join("prefs.json"));

        assert_eq!(store.get(VIEW_MODE_KEY).unwrap(), None);
        store.set(VIEW_MODE_KEY, "list").unwrap();
        assert_eq!(store.get(VIEW_MODE_KEY).unwrap().as_deref(), Some("list"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
