use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    config::Config,
    store::{self, Storage},
    trip::TripRecord,
};

pub const TRIPS_KEY: &str = "biatrack_trips_v1";
pub const SETTINGS_KEY: &str = "biatrack_settings_v1";

/// User preferences, stored apart from the trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "mapsApiKey", default, skip_serializing_if = "Option::is_none")]
    pub maps_api_key: Option<String>,
}

/// The saved trip list. A missing or unreadable slot loads as an empty list.
#[derive(Debug)]
pub struct TripStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> TripStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: TRIPS_KEY.to_string(),
        }
    }

    pub fn from_config(storage: S, config: &Config) -> Self {
        Self::new(storage).with_key(&config.trips_key)
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn load(&self) -> Vec<TripRecord> {
        let trips: Vec<TripRecord> = load_json(&self.storage, &self.key).unwrap_or_default();
        debug!("Loaded {} trips from '{}'", trips.len(), self.key);
        trips
    }

    pub fn save(&mut self, trips: &[TripRecord]) -> Result<(), store::Error> {
        save_json(&mut self.storage, &self.key, trips)?;
        debug!("Saved {} trips to '{}'", trips.len(), self.key);
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

/// Settings slot. Same recovery policy as [`TripStore`].
#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: SETTINGS_KEY.to_string(),
        }
    }

    pub fn from_config(storage: S, config: &Config) -> Self {
        Self {
            storage,
            key: config.settings_key.clone(),
        }
    }

    pub fn load(&self) -> Settings {
        load_json(&self.storage, &self.key).unwrap_or_default()
    }

    pub fn save(&mut self, settings: &Settings) -> Result<(), store::Error> {
        save_json(&mut self.storage, &self.key, settings)
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

/// Reads and decodes a slot. Any failure reads as "absent".
fn load_json<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: Storage,
    T: DeserializeOwned,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!("Could not read '{key}': {err}");
            return None;
        }
    };
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Could not parse '{key}', falling back to default: {err}");
            None
        }
    }
}

fn save_json<S, T>(storage: &mut S, key: &str, value: &T) -> Result<(), store::Error>
where
    S: Storage,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}
