//! User preferences: temperature unit, theme, favorite cities.
//!
//! Preferences are an explicit value owned by [`PreferencesManager`]
//! and persisted through an injected [`PreferencesStore`]; the weather
//! pipeline itself only ever reads the active unit. Loading never
//! fails: missing or corrupt data falls back to defaults with a
//! warning.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use skycast_weather::TemperatureUnit;

use crate::error::PreferencesError;

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Preferences {
    /// Temperature unit preference
    pub temperature_unit: TemperatureUnit,

    /// UI theme
    pub theme: Theme,

    /// Favorite cities in insertion order, de-duplicated
    pub favorite_cities: Vec<String>,
}

/// Storage collaborator for preferences.
pub trait PreferencesStore {
    /// Load persisted preferences, falling back to defaults when the
    /// data is missing or unreadable.
    fn load(&self) -> Preferences;

    /// Persist the given preferences.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferencesError`] when the data cannot be encoded
    /// or written.
    fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError>;
}

/// TOML file-backed preferences store.
#[derive(Debug, Clone)]
pub struct FilePreferencesStore {
    path: PathBuf,
}

impl FilePreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default platform location
    /// (e.g. `~/.config/skycast/preferences.toml`).
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::NoConfigDir`] when the platform has
    /// no config directory.
    pub fn default_location() -> Result<Self, PreferencesError> {
        let config_dir = dirs::config_dir()
            .ok_or(PreferencesError::NoConfigDir)?
            .join("skycast");
        Ok(Self::new(config_dir.join("preferences.toml")))
    }
}

impl PreferencesStore for FilePreferencesStore {
    fn load(&self) -> Preferences {
        if !self.path.exists() {
            return Preferences::default();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Failed to read preferences file, using defaults: {}", e);
                return Preferences::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Preferences file is malformed, using defaults: {}", e);
                Preferences::default()
            }
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(prefs)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory store; preferences last for the process lifetime only.
#[derive(Debug, Default)]
pub struct MemoryPreferencesStore {
    prefs: parking_lot::Mutex<Option<Preferences>>,
}

impl MemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryPreferencesStore {
    fn load(&self) -> Preferences {
        self.prefs.lock().clone().unwrap_or_default()
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        *self.prefs.lock() = Some(prefs.clone());
        Ok(())
    }
}

/// Owns the active preferences and persists after every mutation.
///
/// A failed save is logged and never fatal; the in-memory value stays
/// authoritative for the rest of the session.
pub struct PreferencesManager {
    prefs: Preferences,
    store: Box<dyn PreferencesStore>,
}

impl PreferencesManager {
    /// Load the active preferences from the store.
    pub fn new(store: Box<dyn PreferencesStore>) -> Self {
        let prefs = store.load();
        Self { prefs, store }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.prefs.temperature_unit = unit;
        self.persist();
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.theme = match self.prefs.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.persist();
    }

    /// Add a favorite city. Re-adding an existing city moves it to the
    /// end of the list.
    pub fn add_favorite_city(&mut self, city: &str) {
        self.prefs.favorite_cities.retain(|c| c != city);
        self.prefs.favorite_cities.push(city.to_string());
        self.persist();
    }

    pub fn remove_favorite_city(&mut self, city: &str) {
        self.prefs.favorite_cities.retain(|c| c != city);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.prefs) {
            tracing::warn!("Failed to persist preferences: {}", e);
        }
    }
}
