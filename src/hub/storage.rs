//! Persisted key-value storage for favorites and recent history.
//!
//! The worker has no access to the page's localStorage, so `MirrorStore`
//! keeps an in-memory copy: the page seeds it once at startup and every
//! write is queued as a dirty entry for the page to write back.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{HubError, Result};

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-worker mirror of the page's localStorage.
#[derive(Debug, Default, Clone)]
pub struct MirrorStore {
    entries: HashMap<String, String>,
    dirty: Vec<String>,
}

impl MirrorStore {
    /// Record a value the page already holds. Does not mark it dirty.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Take the entries written since the last drain, oldest first.
    pub fn drain_dirty(&mut self) -> Vec<(String, String)> {
        let keys = std::mem::take(&mut self.dirty);
        keys.into_iter()
            .filter_map(|key| {
                let value = self.entries.get(&key)?.clone();
                Some((key, value))
            })
            .collect()
    }
}

impl KeyValueStore for MirrorStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        if !self.dirty.iter().any(|k| k == key) {
            self.dirty.push(key.to_string());
        }
        Ok(())
    }
}

/// Read a list of ids. Anything but a JSON array of strings reads as empty.
pub fn load_ids(store: &impl KeyValueStore, key: &str) -> Vec<String> {
    match try_load_ids(store, key) {
        Ok(ids) => ids,
        Err(err) => {
            debug!("falling back to empty list: {err}");
            Vec::new()
        }
    }
}

fn try_load_ids(store: &impl KeyValueStore, key: &str) -> Result<Vec<String>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    let parsed: Option<Vec<String>> =
        serde_json::from_str(&raw).map_err(|_| HubError::MalformedValue { key: key.to_string() })?;
    // A stored `null` reads like a missing key.
    Ok(parsed.unwrap_or_default())
}

/// Write a list of ids as a JSON array. Failures are logged, not surfaced.
pub fn save_ids(store: &mut impl KeyValueStore, key: &str, ids: &[String]) {
    let result = serde_json::to_string(ids)
        .map_err(|e| HubError::Storage {
            key: key.to_string(),
            reason: e.to_string(),
        })
        .and_then(|json| store.set(key, json));
    if let Err(err) = result {
        warn!("failed to persist `{key}`: {err}");
    }
}
