//! Persisted user preferences
//!
//! Stored as a single JSON blob under a fixed key. Corrupt or missing data
//! silently falls back to defaults, and partial blobs merge over defaults
//! field by field, so an older stored shape keeps working after upgrades.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage key for the preferences blob
pub const PREFERENCES_KEY: &str = "voice-review-preferences";

/// User playback preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Default playback volume in [0.0, 1.0]
    pub default_volume: f32,
    /// Default playback speed multiplier
    pub default_speed: f32,
    /// Start narration automatically
    pub autoplay: bool,
    /// Keyboard shortcuts enabled
    pub keyboard_shortcuts: bool,
    /// High-contrast display mode
    pub high_contrast: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_volume: 0.8,
            default_speed: 0.9,
            autoplay: false,
            keyboard_shortcuts: true,
            high_contrast: false,
        }
    }
}

/// Key-value store holding the preferences blob
pub trait PreferenceStore {
    /// Read the raw value for a key, if present
    fn get(&self, key: &str) -> Option<String>;
    /// Write the raw value for a key; failures are logged, not surfaced
    fn set(&mut self, key: &str, value: &str);
    /// Remove a key
    fn remove(&mut self, key: &str);
}

/// Load preferences from a store, silently falling back to defaults
#[must_use]
pub fn load(store: &dyn PreferenceStore) -> UserPreferences {
    let Some(raw) = store.get(PREFERENCES_KEY) else {
        return UserPreferences::default();
    };
    match serde_json::from_str(&raw) {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!(error = %e, "corrupt preferences blob, using defaults");
            UserPreferences::default()
        }
    }
}

/// Persist preferences to a store
pub fn save(store: &mut dyn PreferenceStore, prefs: &UserPreferences) {
    match serde_json::to_string(prefs) {
        Ok(json) => store.set(PREFERENCES_KEY, &json),
        Err(e) => tracing::warn!(error = %e, "failed to serialize preferences"),
    }
}

/// Reset stored preferences to defaults
pub fn reset(store: &mut dyn PreferenceStore) -> UserPreferences {
    store.remove(PREFERENCES_KEY);
    UserPreferences::default()
}

/// File-backed store keeping each key as a JSON file in a directory
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::warn!(path = %dir.display(), error = %e, "failed to create prefs directory");
        }
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write preference");
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.path_for(key);
        if path.exists()
            && let Err(e) = std::fs::remove_file(&path)
        {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove preference");
        }
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
