//! Typed persistence over a `KeyValueStore`
//!
//! Printers, filaments and offers are each stored as one JSON array under a
//! fixed key, settings as one JSON object. A missing key loads as an empty
//! list (or default settings). Entities are matched by `id`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{AppResult, Filament, Offer, Printer, Settings};
use crate::ports::KeyValueStore;

pub const PRINTERS_KEY: &str = "printers";
pub const FILAMENTS_KEY: &str = "filaments";
pub const OFFERS_KEY: &str = "offers";
pub const SETTINGS_KEY: &str = "settings";

const KNOWN_KEYS: [&str; 4] = [PRINTERS_KEY, FILAMENTS_KEY, OFFERS_KEY, SETTINGS_KEY];

/// Anything stored in a list and addressed by id
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Printer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Filament {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Offer {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Option<T>> {
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    store.set(key, &json)
}

pub fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Vec<T>> {
    Ok(load(store, key)?.unwrap_or_default())
}

/// Replace the entry with the same id, or append it
pub fn upsert<T>(store: &mut dyn KeyValueStore, key: &str, item: T) -> AppResult<Vec<T>>
where
    T: Identified + Serialize + DeserializeOwned,
{
    let mut items: Vec<T> = load_list(store, key)?;
    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
    save(store, key, &items)?;
    Ok(items)
}

/// Remove the entry with `id`. Returns whether anything was removed.
pub fn remove<T>(store: &mut dyn KeyValueStore, key: &str, id: &str) -> AppResult<bool>
where
    T: Identified + Serialize + DeserializeOwned,
{
    let mut items: Vec<T> = load_list(store, key)?;
    let before = items.len();
    items.retain(|item| item.id() != id);
    if items.len() == before {
        return Ok(false);
    }
    save(store, key, &items)?;
    Ok(true)
}

/// Stored settings, or defaults when none are stored or the blob is unreadable
pub fn load_settings(store: &dyn KeyValueStore) -> Settings {
    match load::<Settings>(store, SETTINGS_KEY) {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(e) => {
            log::warn!("Falling back to default settings: {e}");
            Settings::default()
        }
    }
}

/// Stored keys this version doesn't read, e.g. left behind by a newer release
pub fn unknown_keys(store: &dyn KeyValueStore) -> AppResult<Vec<String>> {
    Ok(store
        .keys()?
        .into_iter()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect())
}

pub fn save_settings(store: &mut dyn KeyValueStore, settings: &Settings) -> AppResult<()> {
    save(store, SETTINGS_KEY, settings)
}
